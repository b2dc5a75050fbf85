use crate::bridge::result_error::error::Error;
use crate::bridge::result_error::result::Result;
use crate::bridge::source::{merge_options, MappedSource, Options, Source, SourceMapper, SourceType};
use crate::bridge::store::{Block, ConfigStore};
use crate::bridge::translator_config::TranslatorConfig;
use serde_json::Value;

/// Maps a `directories` entry to an archive source named after its path.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryMapper;

impl SourceMapper for DirectoryMapper {
    fn map_source(
        &self,
        entry: &Block<'_>,
        _store: &dyn ConfigStore,
        _config: &TranslatorConfig,
    ) -> Result<MappedSource> {
        let source = entry.required("source")?;
        let path = source.required_str("path")?;
        if path.is_empty() {
            return Err(Error::invalid_value(source.child_path("path"), "non-empty string"));
        }

        let defaults = Options::from([("path".to_string(), Value::from(path))]);
        let options = merge_options(defaults, source.options("options")?);

        Ok(MappedSource {
            name: path.to_string(),
            source: Source::builder()
                .source_type(SourceType::Archive)
                .options(options)
                .build(),
        })
    }
}

use crate::bridge::result_error::result::Result;
use crate::bridge::source::Options;
use crate::bridge::store::Block;
use bon::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// Retention policy applied once a backup completed. Options are opaque to
/// the translator and handed over untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct Cleanup {
    #[serde(rename = "type")]
    #[builder(into)]
    #[getset(get = "pub")]
    cleanup_type: String,
    #[builder(default)]
    #[getset(get_copy = "pub")]
    skip_on_failure: bool,
    #[serde(default)]
    #[builder(default)]
    #[getset(get = "pub")]
    options: Options,
}

pub fn map_cleanup(entry: &Block<'_>) -> Result<Option<Cleanup>> {
    entry
        .optional("cleanup")?
        .map(|block| -> Result<Cleanup> {
            let cleanup_type = block.required_str("type")?;
            Ok(Cleanup::builder()
                .cleanup_type(cleanup_type)
                .options(block.options("options")?.unwrap_or_default())
                .build())
        })
        .transpose()
}

pub mod database;
pub mod directory;

use crate::bridge::result_error::result::Result;
use crate::bridge::source::database::DatabaseMapper;
use crate::bridge::source::directory::DirectoryMapper;
use crate::bridge::store::{Block, ConfigStore};
use crate::bridge::translator_config::TranslatorConfig;
use bon::Builder;
use derive_more::Display;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Source and sub-block options as handed to the backup engine.
pub type Options = BTreeMap<String, Value>;

/// What a backup captures and which engine adapter produces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters, CopyGetters)]
pub struct Source {
    #[serde(rename = "type")]
    #[getset(get_copy = "pub")]
    source_type: SourceType,
    #[serde(default)]
    #[builder(default)]
    #[getset(get = "pub")]
    options: Options,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Tar-style archive of a directory.
    #[display("archive")]
    Archive,
    #[display("mysqldump")]
    Mysqldump,
    #[display("pgdump")]
    Pgdump,
}

/// Result of mapping the `source` part of one raw backup block.
#[derive(Clone, Debug, PartialEq)]
pub struct MappedSource {
    pub name: String,
    pub source: Source,
}

/// Maps the `source` part of a raw backup block of one kind.
pub trait SourceMapper: Send + Sync {
    fn map_source(
        &self,
        entry: &Block<'_>,
        store: &dyn ConfigStore,
        config: &TranslatorConfig,
    ) -> Result<MappedSource>;
}

/// Backup kinds the translator knows how to map, keyed by their list name
/// below the configured root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum BackupKind {
    #[display("directories")]
    Directories,
    #[display("databases")]
    Databases,
}

impl BackupKind {
    /// Translation order.
    pub const ALL: [BackupKind; 2] = [BackupKind::Directories, BackupKind::Databases];

    pub fn key(self) -> &'static str {
        match self {
            BackupKind::Directories => "directories",
            BackupKind::Databases => "databases",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn mapper(self) -> &'static dyn SourceMapper {
        match self {
            BackupKind::Directories => &DirectoryMapper,
            BackupKind::Databases => &DatabaseMapper,
        }
    }
}

/// Overlays caller supplied options on computed defaults; the caller wins on
/// overlapping keys.
pub fn merge_options(defaults: Options, overrides: Option<Options>) -> Options {
    let mut merged = defaults;
    merged.extend(overrides.unwrap_or_default());
    merged
}

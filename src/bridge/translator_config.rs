use crate::bridge::validate::{validate_dotted_path, validate_path_segment};
use bon::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the translator reads from and how strict it is.
///
/// Every field has a default matching the Laravel `config/phpbu.php` layout,
/// so `TranslatorConfig::default()` works for a stock installation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, Builder, Getters, CopyGetters)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Store path holding the backup declarations and the output filename.
    #[validate(custom(function = validate_dotted_path))]
    #[builder(default = "phpbu".to_string(), into)]
    #[getset(get = "pub")]
    root: String,
    /// Key below `root` naming the generated configuration file.
    #[validate(custom(function = validate_path_segment))]
    #[builder(default = "config".to_string(), into)]
    #[getset(get = "pub")]
    filename_key: String,
    #[validate(custom(function = validate_dotted_path))]
    #[builder(default = "database.connections".to_string(), into)]
    #[getset(get = "pub")]
    connections_path: String,
    /// Provider tag put on every sync, naming the framework's storage layer.
    #[validate(length(min = 1))]
    #[builder(default = "laravel-storage".to_string(), into)]
    #[getset(get = "pub")]
    sync_provider: String,
    #[builder(default)]
    #[getset(get_copy = "pub")]
    unknown_kinds: UnknownKindPolicy,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// What to do with keys below `root` that are not a registered backup kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKindPolicy {
    #[default]
    Ignore,
    Reject,
}

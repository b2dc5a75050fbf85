//! Object model handed to the backup engine.
//!
//! Serializes to the engine's JSON layout: camelCase keys, absent optional
//! parts omitted, check and sync given as (at most one element) lists.

use crate::bridge::check::Check;
use crate::bridge::cleanup::Cleanup;
use crate::bridge::crypt::Crypt;
use crate::bridge::source::Source;
use crate::bridge::sync::RemoteSync;
use crate::bridge::target::Target;
use bon::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Result of one translation: the engine config file name plus every
/// backup in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct Configuration {
    filename: String,
    backups: Vec<BackupDefinition>,
}

impl Configuration {
    pub(crate) fn new<S: Into<String>>(filename: S) -> Self {
        Self {
            filename: filename.into(),
            backups: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, backup: BackupDefinition) {
        self.backups.push(backup);
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct BackupDefinition {
    #[builder(into)]
    #[getset(get = "pub")]
    name: String,
    #[serde(default)]
    #[builder(default)]
    #[getset(get_copy = "pub")]
    stop_on_failure: bool,
    #[getset(get = "pub")]
    source: Source,
    #[getset(get = "pub")]
    target: Target,
    #[serde(rename = "checks", default, with = "single_item_list")]
    #[getset(get = "pub")]
    check: Option<Check>,
    #[serde(rename = "syncs", default, with = "single_item_list")]
    #[getset(get = "pub")]
    sync: Option<RemoteSync>,
    #[getset(get = "pub")]
    cleanup: Option<Cleanup>,
    #[getset(get = "pub")]
    crypt: Option<Crypt>,
}

mod single_item_list {
    use itertools::Itertools;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T: Serialize, S: Serializer>(
        item: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        item.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, T: Deserialize<'de>, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let len = items.len();
        items
            .into_iter()
            .at_most_one()
            .map_err(|_| D::Error::invalid_length(len, &"at most one item"))
    }
}

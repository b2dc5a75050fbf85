use crate::bridge::result_error::result::Result;
use crate::bridge::source::Options;
use crate::bridge::store::Block;
use bon::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// Remote copy of the finished artifact through the framework's storage layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSync {
    #[serde(rename = "type")]
    #[builder(into)]
    #[getset(get = "pub")]
    sync_type: String,
    #[builder(default)]
    #[getset(get_copy = "pub")]
    skip_on_failure: bool,
    #[getset(get = "pub")]
    options: Options,
}

/// `filesystem` and `path` are copied verbatim, nothing else is read.
pub fn map_sync(entry: &Block<'_>, provider: &str) -> Result<Option<RemoteSync>> {
    entry
        .optional("sync")?
        .map(|block| -> Result<RemoteSync> {
            let options = ["filesystem", "path"]
                .into_iter()
                .map(|key| block.required(key).map(|b| (key.to_string(), b.value().clone())))
                .collect::<Result<Options>>()?;
            Ok(RemoteSync::builder()
                .sync_type(provider)
                .options(options)
                .build())
        })
        .transpose()
}

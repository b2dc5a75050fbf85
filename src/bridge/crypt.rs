use crate::bridge::result_error::result::Result;
use crate::bridge::source::Options;
use crate::bridge::store::Block;
use bon::Builder;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// Encryption applied to the artifact by the engine (openssl, mcrypt, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct Crypt {
    #[serde(rename = "type")]
    #[builder(into)]
    #[getset(get = "pub")]
    crypt_type: String,
    #[builder(default)]
    #[getset(get_copy = "pub")]
    skip_on_failure: bool,
    #[serde(default)]
    #[builder(default)]
    #[getset(get = "pub")]
    options: Options,
}

pub fn map_crypt(entry: &Block<'_>) -> Result<Option<Crypt>> {
    entry
        .optional("crypt")?
        .map(|block| -> Result<Crypt> {
            let crypt_type = block.required_str("type")?;
            Ok(Crypt::builder()
                .crypt_type(crypt_type)
                .options(block.options("options")?.unwrap_or_default())
                .build())
        })
        .transpose()
}

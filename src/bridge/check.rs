use crate::bridge::result_error::result::Result;
use crate::bridge::store::Block;
use bon::Builder;
use getset::Getters;
use serde::{Deserialize, Serialize};

/// Integrity check run against the finished artifact. The engine decides
/// which check types exist; only presence is enforced here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[getset(get = "pub")]
pub struct Check {
    #[serde(rename = "type")]
    #[builder(into)]
    check_type: String,
    #[builder(into)]
    value: String,
}

pub fn map_check(entry: &Block<'_>) -> Result<Option<Check>> {
    entry
        .optional("check")?
        .map(|block| -> Result<Check> {
            Ok(Check::builder()
                .check_type(block.required_str("type")?)
                .value(block.required("value")?.as_scalar_string()?)
                .build())
        })
        .transpose()
}

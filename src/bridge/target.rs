use crate::bridge::result_error::error::Error;
use crate::bridge::result_error::result::Result;
use crate::bridge::store::Block;
use bon::Builder;
use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Where the backup artifact is written and how it is compressed.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, Builder, Getters)]
#[getset(get = "pub")]
pub struct Target {
    #[validate(length(min = 1))]
    #[builder(into)]
    dirname: String,
    #[validate(length(min = 1))]
    #[builder(into)]
    filename: String,
    /// `None` means no compression.
    #[serde(rename = "compress")]
    #[builder(into)]
    compression: Option<String>,
}

const REQUIRED_FIELDS: [&str; 2] = ["dirname", "filename"];

/// Maps the `target` block of a raw backup entry. A missing block fails the
/// same way as a block with an empty `dirname`.
pub fn map_target(entry: &Block<'_>) -> Result<Target> {
    let target_path = entry.child_path("target");
    let target = match entry.optional("target")? {
        None => Target::builder().dirname("").filename("").build(),
        Some(block) => Target::builder()
            .dirname(block.optional_str("dirname")?.unwrap_or_default())
            .filename(block.optional_str("filename")?.unwrap_or_default())
            .maybe_compression(block.optional_str("compression")?.filter(|c| !c.is_empty()))
            .build(),
    };

    if let Err(errors) = target.validate() {
        let fields = errors.field_errors();
        let field = REQUIRED_FIELDS
            .into_iter()
            .find(|f| fields.contains_key(*f))
            .unwrap_or(REQUIRED_FIELDS[0]);
        return Err(Error::InvalidTarget {
            path: target_path,
            field,
        });
    }

    Ok(target)
}

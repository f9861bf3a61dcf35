pub mod xml;

use crate::error::NormalizeError;

/// Decode a JSON source into a value tree. Object key order is preserved
/// (the `preserve_order` feature), which the shape inferencer depends on.
pub fn json_value(input: &str) -> Result<serde_json::Value, NormalizeError> {
    Ok(serde_json::from_str(input)?)
}

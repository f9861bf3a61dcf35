use thiserror::Error;

/// Fatal normalization failures.
///
/// Only an unparseable document aborts a call. Anything short of that,
/// such as an unresolved type name or an empty schema section, degrades
/// in-band (`PrimitiveKind::Unknown`, absent optionals) so batch imports
/// can surface partial results.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

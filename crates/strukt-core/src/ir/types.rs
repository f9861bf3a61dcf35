use serde::{Deserialize, Serialize};

use super::operations::OperationInfo;

/// Canonical scalar kinds. Every schema vocabulary maps onto this fixed
/// set; unrecognized names degrade to `Unknown` instead of failing a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Binary,
    Unknown,
}

/// The normalized, schema-agnostic shape of a structure.
///
/// `Object` field order is the declaration order encountered during
/// traversal and is preserved end-to-end: the field-mapping UI renders
/// fields in exactly this order, so it is part of the contract, not an
/// artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CanonicalType {
    Primitive(PrimitiveKind),
    /// Ordered `(name, type)` fields; names are unique within one object.
    /// A repeated element carries a `[]` suffix on its name and an `Array`
    /// type (see the resolver).
    Object(Vec<(String, CanonicalType)>),
    Array(Box<CanonicalType>),
    /// Named back-reference emitted when a named type is re-entered during
    /// its own expansion. Breaks cyclic type graphs that would otherwise
    /// recurse without bound.
    Ref(String),
}

/// Top-level result of normalizing one source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub root: CanonicalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_info: Option<OperationInfo>,
}

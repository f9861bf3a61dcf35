//! Shape inference from a single JSON sample payload.

use serde_json::Value;

use crate::ir::{CanonicalType, PrimitiveKind};

use super::primitive::map_primitive;

/// Infer a canonical tree from one decoded JSON value.
///
/// This is a structural guess from a single example, not a validated
/// schema: an empty array says nothing about its element type, and a
/// non-empty array is judged by its first element alone. Object fields
/// follow the input's own key order.
pub fn infer(value: &Value) -> CanonicalType {
    match value {
        Value::Null => CanonicalType::Primitive(map_primitive("null")),
        Value::Bool(_) => CanonicalType::Primitive(map_primitive("boolean")),
        Value::Number(n) => {
            let proxy = if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            };
            CanonicalType::Primitive(map_primitive(proxy))
        }
        Value::String(_) => CanonicalType::Primitive(map_primitive("string")),
        Value::Array(items) => match items.first() {
            Some(first) => CanonicalType::Array(Box::new(infer(first))),
            None => CanonicalType::Array(Box::new(CanonicalType::Primitive(
                PrimitiveKind::Unknown,
            ))),
        },
        Value::Object(fields) => CanonicalType::Object(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), infer(field)))
                .collect(),
        ),
    }
}

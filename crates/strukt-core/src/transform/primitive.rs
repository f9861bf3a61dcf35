//! Schema primitive names → canonical kinds.

use crate::ir::PrimitiveKind;
use crate::parse::xml::local_part;

/// Map a schema primitive name to its canonical kind.
///
/// Any namespace prefix is stripped before matching. Besides the XSD
/// built-in scalars, the table covers the dynamic-type proxy names the
/// JSON inferencer feeds in (`number`, `null`). Unrecognized names map to
/// [`PrimitiveKind::Unknown`] so unfamiliar vocabularies degrade instead
/// of aborting a parse.
pub fn map_primitive(schema_type: &str) -> PrimitiveKind {
    match local_part(schema_type) {
        "string" | "normalizedString" | "token" | "anyURI" | "QName" => PrimitiveKind::String,
        "number" | "float" | "double" => PrimitiveKind::Number,
        "int" | "integer" | "long" | "short" | "byte" | "unsignedInt" | "unsignedLong"
        | "unsignedShort" | "unsignedByte" | "nonNegativeInteger" | "nonPositiveInteger"
        | "positiveInteger" | "negativeInteger" => PrimitiveKind::Integer,
        "decimal" => PrimitiveKind::Decimal,
        "boolean" => PrimitiveKind::Boolean,
        "date" => PrimitiveKind::Date,
        "dateTime" | "time" => PrimitiveKind::DateTime,
        "base64Binary" | "hexBinary" => PrimitiveKind::Binary,
        _ => PrimitiveKind::Unknown,
    }
}

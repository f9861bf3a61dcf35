//! Canonical structure normalization and WSDL introspection.
//!
//! The engine turns loosely structured interface definitions (JSON sample
//! payloads, WSDL service descriptions, inline XSD fragments) into one
//! canonical type-tree representation ([`ir::CanonicalType`]), and recovers
//! operation semantics, transport actions, and namespace metadata from WSDL
//! documents.
//!
//! Every entry point is a pure function over its input text. Resolution
//! caches live inside a per-call resolver and are discarded afterwards, so
//! concurrent calls from any number of threads need no locking.

pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

use serde::{Deserialize, Serialize};

use error::NormalizeError;
use ir::Structure;

/// Declared kind of a raw source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Json,
    Wsdl,
    Xsd,
}

/// Options controlling canonical tree rendering.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Append `[]` to the names of repeated fields, the format the legacy
    /// field-mapping UI expects. Off renders plain names.
    pub array_markers: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            array_markers: true,
        }
    }
}

/// Normalize raw source text of the declared kind into a canonical
/// [`Structure`].
///
/// JSON always yields a structure; WSDL/XSD yield `Ok(None)` when the
/// document holds no extractable elements. Only an unparseable document
/// is an error.
pub fn normalize(kind: SourceKind, input: &str) -> Result<Option<Structure>, NormalizeError> {
    normalize_with_options(kind, input, &NormalizeOptions::default())
}

/// [`normalize`] with explicit rendering options.
pub fn normalize_with_options(
    kind: SourceKind,
    input: &str,
    options: &NormalizeOptions,
) -> Result<Option<Structure>, NormalizeError> {
    match kind {
        SourceKind::Json => {
            let value = parse::json_value(input)?;
            Ok(Some(Structure {
                root: transform::infer(&value),
                operation_info: None,
            }))
        }
        SourceKind::Wsdl | SourceKind::Xsd => {
            transform::extract_structure_with_options(input, options)
        }
    }
}

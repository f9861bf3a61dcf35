//! Top-level structure extraction from WSDL and standalone schema documents.

use std::collections::HashSet;

use log::debug;

use crate::NormalizeOptions;
use crate::error::NormalizeError;
use crate::ir::{CanonicalType, Structure};
use crate::parse::xml::{Document, local_part};

use super::operations::{first_operation, operation_info};
use super::type_resolver::TypeResolver;

/// Extract the canonical payload structure of a WSDL (or bare schema)
/// document.
///
/// `message`/`part` declarations are tried first; a document without any
/// falls back to the top-level `element` declarations of its schema
/// sections. `Ok(None)` means the document holds nothing extractable at
/// all, which is distinct from a structure whose object has zero fields.
pub fn extract_structure(input: &str) -> Result<Option<Structure>, NormalizeError> {
    extract_structure_with_options(input, &NormalizeOptions::default())
}

pub fn extract_structure_with_options(
    input: &str,
    options: &NormalizeOptions,
) -> Result<Option<Structure>, NormalizeError> {
    let doc = Document::parse(input)?;
    let mut resolver = TypeResolver::new(&doc, options.clone());

    let mut fields: Vec<(String, CanonicalType)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Message-bound elements take precedence.
    for message in doc.elements("message") {
        for part in doc.children(message).iter().copied() {
            if doc.local_name(part) != "part" {
                continue;
            }
            if let Some(element_ref) = doc.attr(part, "element") {
                let name = local_part(element_ref).to_string();
                if seen.insert(name.clone()) {
                    let resolved = resolver.resolve_element_ref(element_ref);
                    fields.push((name, resolved));
                }
            } else if let Some(type_ref) = doc.attr(part, "type") {
                // rpc-style part: the part itself names the payload.
                let name = doc
                    .attr(part, "name")
                    .unwrap_or(local_part(type_ref))
                    .to_string();
                if seen.insert(name.clone()) {
                    let resolved = resolver.resolve(type_ref);
                    fields.push((name, resolved));
                }
            }
        }
    }

    // Nothing message-bound: take the root schema elements directly.
    if fields.is_empty() {
        debug!("no message-bound parts found, scanning root schema elements");
        for element in resolver.root_elements() {
            if let Some(name) = doc.attr(element, "name") {
                let name = name.to_string();
                if seen.insert(name.clone()) {
                    let resolved = resolver.resolve_element(element);
                    fields.push((name, resolved));
                }
            }
        }
    }

    if fields.is_empty() {
        return Ok(None);
    }

    let operation_info = first_operation(&doc).map(|op| operation_info(&doc, op));
    Ok(Some(Structure {
        root: CanonicalType::Object(fields),
        operation_info,
    }))
}

//! Operation enumeration, classification, and SOAP action extraction.

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::error::NormalizeError;
use crate::ir::{MessageKind, OperationAction, OperationInfo};
use crate::parse::xml::{Document, NodeId};

/// Named operations declared by a WSDL, in first-seen order, de-duplicated
/// by name.
///
/// `portType` scopes are authoritative; when prefix ambiguity leaves them
/// empty, `binding` scopes are scanned as a fallback.
pub fn list_operations(input: &str) -> Result<Vec<String>, NormalizeError> {
    let doc = Document::parse(input)?;
    let mut names = operations_in_scope(&doc, "portType");
    if names.is_empty() {
        debug!("no portType operations found, falling back to binding scan");
        names = operations_in_scope(&doc, "binding");
    }
    Ok(names.into_iter().collect())
}

fn operations_in_scope(doc: &Document, scope: &str) -> IndexSet<String> {
    let mut names = IndexSet::new();
    for section in doc.elements(scope) {
        for op in doc.children(section).iter().copied() {
            if doc.local_name(op) != "operation" {
                continue;
            }
            if let Some(name) = doc.attr(op, "name") {
                names.insert(name.to_string());
            }
        }
    }
    names
}

/// Classify one operation node by its immediate message children.
pub fn operation_info(doc: &Document, operation: NodeId) -> OperationInfo {
    let mut message_types = Vec::new();
    for child in doc.children(operation).iter().copied() {
        let kind = match doc.local_name(child) {
            "input" => MessageKind::Input,
            "output" => MessageKind::Output,
            "fault" => MessageKind::Fault,
            _ => continue,
        };
        if !message_types.contains(&kind) {
            message_types.push(kind);
        }
    }

    let has_input = message_types.contains(&MessageKind::Input);
    let has_output = message_types.contains(&MessageKind::Output);
    OperationInfo {
        has_input,
        has_output,
        has_fault: message_types.contains(&MessageKind::Fault),
        is_synchronous: has_input && has_output,
        message_types,
    }
}

/// First operation declared in the document, preferring `portType` scope.
pub(crate) fn first_operation(doc: &Document) -> Option<NodeId> {
    for scope in ["portType", "binding"] {
        for section in doc.elements(scope) {
            for op in doc.children(section).iter().copied() {
                if doc.local_name(op) == "operation" {
                    return Some(op);
                }
            }
        }
    }
    None
}

/// SOAP action strings bound per operation, first occurrence winning.
///
/// An operation whose transport descriptor declares `soapAction=""` is
/// reported with an empty action; an operation with no declaration at all
/// is omitted from the list.
pub fn extract_actions(input: &str) -> Result<Vec<OperationAction>, NormalizeError> {
    let doc = Document::parse(input)?;
    let mut actions: IndexMap<String, String> = IndexMap::new();

    for binding in doc.elements("binding") {
        for op in doc.children(binding).iter().copied() {
            if doc.local_name(op) != "operation" {
                continue;
            }
            let Some(name) = doc.attr(op, "name") else {
                continue;
            };
            // The SOAP 1.1/1.2 transport descriptor is a nested element
            // sharing the `operation` local name.
            let Some(transport) = doc
                .children(op)
                .iter()
                .copied()
                .find(|&child| doc.local_name(child) == "operation")
            else {
                continue;
            };
            let Some(action) = doc.attr(transport, "soapAction") else {
                continue;
            };
            actions
                .entry(name.to_string())
                .or_insert_with(|| action.to_string());
        }
    }

    Ok(actions
        .into_iter()
        .map(|(operation, action)| OperationAction { operation, action })
        .collect())
}

/// The single usable action, when exactly one operation declares one.
/// With zero or several candidates the choice stays with the caller.
pub fn auto_select_action(actions: &[OperationAction]) -> Option<&OperationAction> {
    match actions {
        [single] => Some(single),
        _ => None,
    }
}

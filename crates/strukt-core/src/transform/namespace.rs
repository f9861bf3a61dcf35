//! Namespace metadata of a WSDL root element.

use crate::ir::NamespaceInfo;
use crate::parse::xml::Document;

/// Target namespace, its declared prefix, and the first transport address
/// of a WSDL document.
///
/// Malformed or rootless documents yield `None` rather than a partially
/// filled record, as does a root without a target namespace.
pub fn extract_namespace(input: &str) -> Option<NamespaceInfo> {
    let doc = Document::parse(input).ok()?;
    let root = doc.root()?;
    let uri = doc.attr(root, "targetNamespace")?.to_string();

    let prefix = doc
        .node(root)
        .attrs
        .iter()
        .find_map(|(key, value)| {
            let declared = key.strip_prefix("xmlns:")?;
            (value == &uri).then(|| declared.to_string())
        })
        .unwrap_or_default();

    let schema_location = doc
        .elements("address")
        .into_iter()
        .find_map(|node| doc.attr(node, "location"))
        .unwrap_or_default()
        .to_string();

    Some(NamespaceInfo {
        uri,
        prefix,
        schema_location,
    })
}

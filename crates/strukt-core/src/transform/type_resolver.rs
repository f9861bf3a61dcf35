//! Recursive type resolution over the schema sections of one document.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::warn;

use crate::NormalizeOptions;
use crate::ir::{CanonicalType, PrimitiveKind};
use crate::parse::xml::{Document, NodeId, local_part};

use super::primitive::map_primitive;

/// Containers the child-element scan descends through without treating
/// them as declarations themselves.
const MODEL_GROUPS: &[&str] = &[
    "sequence",
    "all",
    "choice",
    "complexContent",
    "simpleContent",
    "extension",
];

/// Resolves qualified type references against every schema section of one
/// document.
///
/// Construct one resolver per parse: the memoization cache and the cycle
/// guards are scoped to a single invocation and never shared across calls
/// or threads.
pub struct TypeResolver<'a> {
    doc: &'a Document,
    schemas: Vec<NodeId>,
    cache: IndexMap<String, CanonicalType>,
    expanding_types: HashSet<String>,
    expanding_elements: HashSet<String>,
    options: NormalizeOptions,
}

impl<'a> TypeResolver<'a> {
    pub fn new(doc: &'a Document, options: NormalizeOptions) -> Self {
        Self {
            doc,
            schemas: doc.elements("schema"),
            cache: IndexMap::new(),
            expanding_types: HashSet::new(),
            expanding_elements: HashSet::new(),
            options,
        }
    }

    /// Resolve a (possibly prefixed) type reference to a canonical tree.
    ///
    /// Named complex types expand to objects, named simple types to the
    /// primitive kind of their restriction base. A name declared in no
    /// schema section falls through to the primitive mapper, so unknown
    /// vocabularies come back as `Primitive(Unknown)` rather than failing
    /// the parse.
    pub fn resolve(&mut self, type_ref: &str) -> CanonicalType {
        let local = local_part(type_ref).to_string();

        if let Some(cached) = self.cache.get(&local) {
            return cached.clone();
        }

        if let Some(decl) = self.find_type_decl(&local, "complexType") {
            if self.expanding_types.contains(&local) {
                // Re-entered during its own expansion: emit a back-reference
                // instead of recursing into the cycle.
                return CanonicalType::Ref(local);
            }
            self.expanding_types.insert(local.clone());
            let expanded = self.expand_complex_type(decl);
            self.expanding_types.remove(&local);
            self.cache.insert(local, expanded.clone());
            return expanded;
        }

        if let Some(decl) = self.find_type_decl(&local, "simpleType") {
            let resolved = CanonicalType::Primitive(self.simple_type_kind(decl));
            self.cache.insert(local, resolved.clone());
            return resolved;
        }

        let kind = map_primitive(&local);
        if kind == PrimitiveKind::Unknown {
            warn!("type `{local}` not declared in any schema section, treating as unknown");
        }
        CanonicalType::Primitive(kind)
    }

    /// Expand a `complexType` node (named or inline anonymous) into an
    /// object whose fields follow declaration order.
    pub fn expand_complex_type(&mut self, complex_type: NodeId) -> CanonicalType {
        let doc = self.doc;
        let mut fields: Vec<(String, CanonicalType)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for element in self.element_declarations(complex_type) {
            let name = match doc
                .attr(element, "name")
                .or_else(|| doc.attr(element, "ref").map(local_part))
            {
                Some(name) => name,
                None => continue,
            };
            // Field names are unique within one object; first wins.
            if !seen.insert(name.to_string()) {
                continue;
            }

            let value = self.resolve_element(element);

            if is_repeated(doc, element) {
                let field_name = if self.options.array_markers {
                    format!("{name}[]")
                } else {
                    name.to_string()
                };
                fields.push((field_name, CanonicalType::Array(Box::new(value))));
            } else {
                fields.push((name.to_string(), value));
            }
        }

        CanonicalType::Object(fields)
    }

    /// Resolve the type of one element declaration: inline complex type
    /// first, then an explicit `type` attribute, then a `ref` to another
    /// top-level declaration, then an inline simple type; an element with
    /// none of these defaults to string content.
    pub fn resolve_element(&mut self, element: NodeId) -> CanonicalType {
        let doc = self.doc;
        if let Some(inline) = doc.child(element, "complexType") {
            self.expand_complex_type(inline)
        } else if let Some(type_ref) = doc.attr(element, "type") {
            self.resolve(type_ref)
        } else if let Some(target) = doc.attr(element, "ref") {
            self.resolve_element_ref(target)
        } else if let Some(simple) = doc.child(element, "simpleType") {
            CanonicalType::Primitive(self.simple_type_kind(simple))
        } else {
            CanonicalType::Primitive(PrimitiveKind::String)
        }
    }

    /// Resolve a `ref="tns:Name"` element reference through its top-level
    /// declaration.
    pub fn resolve_element_ref(&mut self, target: &str) -> CanonicalType {
        let local = local_part(target).to_string();
        match self.find_root_element(&local) {
            Some(decl) => {
                if self.expanding_elements.contains(&local) {
                    return CanonicalType::Ref(local);
                }
                self.expanding_elements.insert(local.clone());
                let resolved = self.resolve_element(decl);
                self.expanding_elements.remove(&local);
                resolved
            }
            None => {
                warn!("element `{local}` has no top-level declaration, treating as unknown");
                CanonicalType::Primitive(PrimitiveKind::Unknown)
            }
        }
    }

    /// Every top-level `element` declaration across all schema sections,
    /// in document order.
    pub fn root_elements(&self) -> Vec<NodeId> {
        let doc = self.doc;
        self.schemas
            .iter()
            .flat_map(|&schema| doc.children(schema).iter().copied())
            .filter(|&node| doc.local_name(node) == "element")
            .collect()
    }

    /// Element declarations reachable from a complex type through
    /// model-group containers, in document order. Does not descend into
    /// the elements themselves, so nested inline types stay with their own
    /// declaration.
    fn element_declarations(&self, complex_type: NodeId) -> Vec<NodeId> {
        let doc = self.doc;
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = doc.children(complex_type).iter().rev().copied().collect();
        while let Some(node) = pending.pop() {
            let local = doc.local_name(node);
            if local == "element" {
                out.push(node);
            } else if MODEL_GROUPS.contains(&local) {
                pending.extend(doc.children(node).iter().rev().copied());
            }
        }
        out
    }

    /// Top-level declaration of the given kind with a matching `name`,
    /// searched across every schema section.
    fn find_type_decl(&self, local: &str, kind: &str) -> Option<NodeId> {
        let doc = self.doc;
        self.schemas
            .iter()
            .flat_map(|&schema| doc.children(schema).iter().copied())
            .find(|&node| doc.local_name(node) == kind && doc.attr(node, "name") == Some(local))
    }

    fn find_root_element(&self, local: &str) -> Option<NodeId> {
        let doc = self.doc;
        self.schemas
            .iter()
            .flat_map(|&schema| doc.children(schema).iter().copied())
            .find(|&node| {
                doc.local_name(node) == "element" && doc.attr(node, "name") == Some(local)
            })
    }

    /// The primitive kind of a simple type's restriction base. Facets
    /// (length, pattern, enumeration) are ignored.
    fn simple_type_kind(&self, simple_type: NodeId) -> PrimitiveKind {
        let doc = self.doc;
        doc.descendants(simple_type)
            .into_iter()
            .find(|&node| doc.local_name(node) == "restriction")
            .and_then(|node| doc.attr(node, "base"))
            .map(map_primitive)
            .unwrap_or(PrimitiveKind::Unknown)
    }
}

/// `maxOccurs="unbounded"` or any bound above one marks a repeated element.
fn is_repeated(doc: &Document, element: NodeId) -> bool {
    match doc.attr(element, "maxOccurs") {
        Some("unbounded") => true,
        Some(bound) => bound.parse::<u64>().map(|n| n > 1).unwrap_or(false),
        None => false,
    }
}

//! Immutable, indexed XML document model.
//!
//! quick-xml's pull reader builds a flat node arena once; every later
//! lookup is a pure function over the finished arena. Nodes land in the
//! arena in document order, so a linear scan doubles as a document-order
//! traversal.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::NormalizeError;

/// Index of a node in its [`Document`] arena.
pub type NodeId = usize;

/// One element node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Qualified name as written in the source (`xs:element`).
    pub name: String,
    /// Attributes with their qualified names, in source order.
    pub attrs: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Concatenated character data directly inside this element.
    pub text: String,
}

/// A parsed XML document as a node arena.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    /// Parse a document into an arena.
    ///
    /// Well-formedness errors (mismatched tags, bad syntax) surface as
    /// [`NormalizeError::Xml`]; a malformed attribute inside an otherwise
    /// readable tag is skipped rather than failing the document.
    pub fn parse(input: &str) -> Result<Document, NormalizeError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut doc = Document::default();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let id = doc.push_node(&e, stack.last().copied());
                    stack.push(id);
                }
                Event::Empty(e) => {
                    doc.push_node(&e, stack.last().copied());
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(e) => {
                    if let Some(&top) = stack.last() {
                        let text = e.unescape().unwrap_or_default();
                        doc.nodes[top].text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if let Some(&top) = stack.last() {
                        doc.nodes[top].text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(doc)
    }

    fn push_node(&mut self, start: &BytesStart<'_>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attrs = start
            .attributes()
            .filter_map(|a| a.ok())
            .map(|a| {
                let key = String::from_utf8_lossy(a.key.as_ref()).into_owned();
                let value = a
                    .unescape_value()
                    .map(|v| v.into_owned())
                    .unwrap_or_default();
                (key, value)
            })
            .collect();
        self.nodes.push(Node {
            name,
            attrs,
            parent,
            children: Vec::new(),
            text: String::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            // Keep the first root; trailing junk elements are ignored.
            None if self.root.is_none() => self.root = Some(id),
            None => {}
        }
        id
    }

    /// The document element, absent when the input held no elements.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self, id: NodeId) -> &str {
        local_part(&self.nodes[id].name)
    }

    /// Attribute looked up by local name, ignoring any prefix on the
    /// attribute as written. WSDL tooling in the wild is sloppy about
    /// attribute prefixes, so matching is deliberately lax.
    pub fn attr(&self, id: NodeId, local: &str) -> Option<&str> {
        self.nodes[id]
            .attrs
            .iter()
            .find(|(key, _)| local_part(key) == local)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// First direct child with the given local name.
    pub fn child(&self, id: NodeId, local: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.local_name(c) == local)
    }

    /// Every element in the document with the given local name, in
    /// document order.
    pub fn elements(&self, local: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.local_name(id) == local)
            .collect()
    }

    /// Every descendant of `id` (excluding `id` itself), in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.children(next).iter().rev().copied());
        }
        out
    }
}

/// The part of a qualified name after the last colon.
pub fn local_part(qname: &str) -> &str {
    qname.rsplit(':').next().unwrap_or(qname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_elements() {
        let doc = Document::parse(
            r#"<wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/">
                 <wsdl:types>
                   <xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                     <xs:element name="Order" type="xs:string"/>
                   </xs:schema>
                 </wsdl:types>
               </wsdl:definitions>"#,
        )
        .unwrap();

        let root = doc.root().unwrap();
        assert_eq!(doc.local_name(root), "definitions");
        assert_eq!(doc.node(root).name, "wsdl:definitions");

        let element = doc.elements("element");
        assert_eq!(element.len(), 1);
        assert_eq!(doc.attr(element[0], "name"), Some("Order"));
        assert_eq!(doc.attr(element[0], "type"), Some("xs:string"));
    }

    #[test]
    fn attr_lookup_ignores_prefix() {
        let doc = Document::parse(r#"<a xsi:nil="true"/>"#).unwrap();
        let root = doc.root().unwrap();
        assert_eq!(doc.attr(root, "nil"), Some("true"));
    }

    #[test]
    fn descendants_in_document_order() {
        let doc = Document::parse("<a><b><c/></b><d/></a>").unwrap();
        let root = doc.root().unwrap();
        let names: Vec<&str> = doc
            .descendants(root)
            .into_iter()
            .map(|id| doc.local_name(id))
            .collect();
        assert_eq!(names, ["b", "c", "d"]);
    }

    #[test]
    fn text_content_is_captured() {
        let doc = Document::parse("<a><b>hello</b></a>").unwrap();
        let root = doc.root().unwrap();
        let b = doc.child(root, "b").unwrap();
        assert_eq!(doc.node(b).text, "hello");
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        assert!(Document::parse("<a><b></a></b>").is_err());
    }

    /// The parser must never panic, whatever the input.
    #[test]
    fn garbage_inputs_do_not_panic() {
        let inputs = [
            "",
            "not xml at all",
            "<",
            "<a",
            "<<<>>>",
            "\u{0}\u{1}\u{2}",
            "<a attr=></a>",
        ];
        for input in inputs {
            let _ = Document::parse(input);
        }
    }

    #[test]
    fn local_part_strips_prefix() {
        assert_eq!(local_part("xsd:string"), "string");
        assert_eq!(local_part("string"), "string");
        assert_eq!(local_part("a:b:c"), "c");
    }
}

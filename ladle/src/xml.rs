//! XML documents and the XML generator.
//!
//! XML text content is whitespace-significant, so pretty-printing only ever
//! adds line breaks and indentation between children of an element whose
//! children are *all* elements. As soon as a text node is among the
//! children, that sibling list is written back-to-back exactly as built.

use std::fmt::{self, Write};

use crate::builder::Builder;
use crate::escape::escape_into;
use crate::node::{Element, Node};

/// The declaration every generated XML document starts with.
pub const PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// An XML document: an ordered list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, facet::Facet)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate compact XML.
    pub fn to_xml(&self) -> String {
        generate(self, "")
    }

    /// Generate XML indented with two spaces.
    pub fn to_xml_pretty(&self) -> String {
        generate(self, "  ")
    }

    /// Generate XML with a custom indentation unit; `""` is compact.
    pub fn to_xml_with_indent(&self, indent: &str) -> String {
        generate(self, indent)
    }
}

impl Builder for Document {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

/// Generate XML text for `document`.
///
/// An empty `indent` produces compact output; anything else is repeated once
/// per nesting level.
pub fn generate(document: &Document, indent: &str) -> String {
    debug!(
        nodes = document.nodes.len(),
        pretty = !indent.is_empty(),
        "generating xml document"
    );
    let mut out = String::new();
    let mut generator = Generator::new(&mut out, indent);
    generator.write_document(document);
    out
}

/// Generate XML text for a single element and its subtree, without the
/// prologue.
pub fn generate_element(element: &Element, indent: &str) -> String {
    let mut out = String::new();
    let mut generator = Generator::new(&mut out, indent);
    generator.write_element(element);
    out
}

/// Write `<name` followed by every attribute, escaped and double-quoted.
pub(crate) fn write_start_tag(out: &mut String, element: &Element) {
    let _ = write!(out, "<{}", element.name());
    for (name, value) in element.attributes() {
        let _ = write!(out, " {name}=\"");
        escape_into(out, value, true);
        out.push('"');
    }
}

struct Generator<'a> {
    out: &'a mut String,
    indent: &'a str,
    depth: usize,
}

impl<'a> Generator<'a> {
    fn new(out: &'a mut String, indent: &'a str) -> Self {
        Self {
            out,
            indent,
            depth: 0,
        }
    }

    fn pretty(&self) -> bool {
        !self.indent.is_empty()
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
    }

    fn write_newline(&mut self) {
        if self.pretty() {
            self.out.push('\n');
        }
    }

    fn write_document(&mut self, doc: &Document) {
        self.out.push_str(PROLOGUE);
        self.write_newline();

        for node in &doc.nodes {
            self.write_node(node);
        }
    }

    fn write_element(&mut self, elem: &Element) {
        trace!(tag = elem.name(), depth = self.depth, "xml element");
        write_start_tag(self.out, elem);

        let children = elem.nodes();
        if elem.is_self_closing() && children.is_empty() {
            self.out.push_str(" />");
            if self.depth == 0 {
                self.write_newline();
            }
            return;
        }
        self.out.push('>');

        // Any text child makes the whole sibling list whitespace-significant.
        let indent_children = self.pretty() && children.iter().all(Node::is_element);

        if indent_children {
            self.out.push('\n');
            self.depth += 1;
            for child in children {
                self.write_indent();
                self.write_node(child);
                self.out.push('\n');
            }
            self.depth -= 1;
            self.write_indent();
        } else {
            self.depth += 1;
            for child in children {
                self.write_node(child);
            }
            self.depth -= 1;
        }

        let _ = write!(self.out, "</{}>", elem.name());
        if self.depth == 0 {
            self.write_newline();
        }
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Text(text) => escape_into(self.out, text, false),
        }
    }
}

//! HTML documents and the HTML5 generator.
//!
//! Pretty-printing HTML has to respect inline flow: whitespace between an
//! inline element and the text around it is visible in the rendered page,
//! while whitespace between block-level elements is not. The generator
//! therefore only breaks a sibling list across lines when at least one of the
//! siblings is a block element, and even then keeps runs of text and inline
//! elements together on one line.
//!
//! Text inside raw text elements (`script`, `style`) is written unescaped.

use std::fmt::{self, Write};

use crate::builder::Builder;
use crate::escape::escape_into;
use crate::node::{Element, Node};
use crate::xml::write_start_tag;

/// The doctype full documents start with.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Raw text elements - content is not escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// An HTML document or fragment.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
pub struct Document {
    nodes: Vec<Node>,
    /// Whether `<!DOCTYPE html>` is emitted. Fragments leave it out.
    pub doctype: bool,
}

impl Document {
    /// Create an empty full document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            doctype: true,
        }
    }

    /// Create an empty fragment, generated without a doctype.
    pub fn fragment() -> Self {
        Self {
            nodes: Vec::new(),
            doctype: false,
        }
    }

    /// Add an `<html lang="...">` root element and let `build` fill it in.
    ///
    /// ```
    /// use ladle::{Builder, html};
    ///
    /// let doc = html::Document::new().with_html_root("en", |html| {
    ///     html.element("body").element("p").text("Hi");
    /// });
    /// assert_eq!(
    ///     doc.to_html(),
    ///     "<!DOCTYPE html><html lang=\"en\"><body><p>Hi</p></body></html>"
    /// );
    /// ```
    pub fn with_html_root(
        mut self,
        lang: impl Into<String>,
        build: impl FnOnce(&mut Element),
    ) -> Self {
        let html = self.element("html");
        html.set_attribute("lang", lang);
        build(html);
        self
    }

    /// Generate compact HTML.
    pub fn to_html(&self) -> String {
        generate(self, "")
    }

    /// Generate HTML indented with two spaces.
    pub fn to_html_pretty(&self) -> String {
        generate(self, "  ")
    }

    /// Generate HTML with a custom indentation unit; `""` is compact.
    pub fn to_html_with_indent(&self, indent: &str) -> String {
        generate(self, indent)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
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
        f.write_str(&self.to_html())
    }
}

/// Generate HTML text for `document`.
///
/// An empty `indent` produces compact output; anything else is repeated once
/// per nesting level.
pub fn generate(document: &Document, indent: &str) -> String {
    debug!(
        nodes = document.nodes.len(),
        doctype = document.doctype,
        pretty = !indent.is_empty(),
        "generating html document"
    );
    let mut out = String::new();
    let mut generator = Generator::new(&mut out, indent);
    generator.write_document(document);
    out
}

/// Generate HTML text for a single element and its subtree.
pub fn generate_element(element: &Element, indent: &str) -> String {
    let mut out = String::new();
    let mut generator = Generator::new(&mut out, indent);
    generator.write_element(element);
    out
}

/// Whitespace to put around one child of a multi-line sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChildLayout {
    indent_before: bool,
    newline_after: bool,
}

/// Text and inline elements flow into each other on the same line.
fn flows(node: Option<&Node>) -> bool {
    match node {
        Some(Node::Text(_)) => true,
        Some(Node::Element(e)) => e.is_inline(),
        None => false,
    }
}

fn is_block(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Element(e)) if !e.is_inline())
}

fn child_layout(
    index: usize,
    prev: Option<&Node>,
    child: &Node,
    next: Option<&Node>,
) -> ChildLayout {
    match child {
        Node::Element(e) if e.is_inline() => ChildLayout {
            indent_before: index == 0,
            newline_after: is_block(next),
        },
        Node::Text(text) => ChildLayout {
            indent_before: !flows(prev),
            newline_after: !flows(next) && !text.ends_with('\n'),
        },
        Node::Element(_) => ChildLayout {
            indent_before: true,
            newline_after: true,
        },
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
        if doc.doctype {
            self.out.push_str(DOCTYPE);
            self.write_newline();
        }

        for node in &doc.nodes {
            self.write_node(node, true);
        }
    }

    fn write_element(&mut self, elem: &Element) {
        trace!(
            tag = elem.name(),
            inline = elem.is_inline(),
            depth = self.depth,
            "html element"
        );
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

        let escape_text = !is_raw_text_element(elem.name());
        // A single block child puts the whole sibling list on separate lines.
        let indent_children = self.pretty() && children.iter().any(|c| is_block(Some(c)));

        self.depth += 1;
        if indent_children {
            self.out.push('\n');
            for (i, child) in children.iter().enumerate() {
                let prev = i.checked_sub(1).and_then(|p| children.get(p));
                let layout = child_layout(i, prev, child, children.get(i + 1));
                if layout.indent_before {
                    self.write_indent();
                }
                self.write_node(child, escape_text);
                if layout.newline_after {
                    self.out.push('\n');
                }
            }
        } else {
            for child in children {
                self.write_node(child, escape_text);
            }
        }
        self.depth -= 1;

        if indent_children {
            self.write_indent();
        }
        let _ = write!(self.out, "</{}>", elem.name());
        if self.depth == 0 {
            self.write_newline();
        }
    }

    fn write_node(&mut self, node: &Node, escape_text: bool) {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Text(text) if escape_text => escape_into(self.out, text, false),
            Node::Text(text) => self.out.push_str(text),
        }
    }
}

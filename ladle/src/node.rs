//! Markup tree types.
//!
//! A tree is made of [`Node`]s: either an [`Element`] or a run of text.
//! Elements own their children outright, so a tree has no back-references
//! and can be cloned or moved as a plain value.
//!
//! Trees are grown through the [`Builder`](crate::Builder) trait, which both
//! elements and documents implement.

use compact_str::CompactString;
use indexmap::IndexMap;

/// Markup content: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node
    Text(String),
}

impl Node {
    /// Returns true if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as mutable element reference.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Get text content of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

/// A markup element.
///
/// Tag names and attribute keys are taken verbatim; nothing checks that they
/// are legal XML or HTML names.
#[derive(Debug, Clone, Default, PartialEq, Eq, facet::Facet)]
pub struct Element {
    name: CompactString,
    /// Insertion-ordered. Overwriting a key keeps its original slot.
    attributes: IndexMap<CompactString, String>,
    pub(crate) nodes: Vec<Node>,
    self_closing: bool,
    inline: bool,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute value.
    ///
    /// If the attribute already exists its value is replaced in place, so
    /// attribute order only ever reflects first insertion.
    pub fn set_attribute(
        &mut self,
        name: impl Into<CompactString>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Remove an attribute, keeping the relative order of the others.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Iterate over attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Mark the element as self-closing.
    ///
    /// The flag only takes effect while the element has no children; an
    /// element that is self-closing but has children is rendered with a
    /// normal start and end tag.
    pub fn self_closing(&mut self) -> &mut Self {
        self.self_closing = true;
        self
    }

    /// Mark the element as inline. Only the HTML generator looks at this.
    pub fn inline(&mut self) -> &mut Self {
        self.inline = true;
        self
    }

    /// Whether [`Element::self_closing`] was called.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Whether [`Element::inline`] was called.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Get text content of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.nodes {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Per-tag flags a tag catalogue applies after creating an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagTraits {
    /// Render as `<name />` when empty.
    pub self_closing: bool,
    /// Flow with surrounding text instead of taking its own line (HTML).
    pub inline: bool,
}

impl TagTraits {
    /// Block-level container, e.g. `div`.
    pub const BLOCK: Self = Self {
        self_closing: false,
        inline: false,
    };

    /// Inline container, e.g. `span`.
    pub const INLINE: Self = Self {
        self_closing: false,
        inline: true,
    };

    /// Block-level void element, e.g. `hr`.
    pub const VOID: Self = Self {
        self_closing: true,
        inline: false,
    };

    /// Inline void element, e.g. `br` or `img`.
    pub const INLINE_VOID: Self = Self {
        self_closing: true,
        inline: true,
    };

    /// Apply these flags to `element`.
    pub fn apply(self, element: &mut Element) {
        if self.self_closing {
            element.self_closing();
        }
        if self.inline {
            element.inline();
        }
    }
}

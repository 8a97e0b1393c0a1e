//! The tree-growing primitives shared by elements and documents.

use compact_str::CompactString;

use crate::node::{Element, Node, TagTraits};

/// Anything that owns an ordered list of child nodes.
///
/// Implementors only provide access to their child list; every building
/// operation is a provided method on top of it.
///
/// ```
/// use ladle::{Builder, xml};
///
/// let mut doc = xml::Document::new();
/// doc.element("note")
///     .set_attribute("lang", "en")
///     .element_with("to", |to| {
///         to.text("Tove");
///     })
///     .element("body")
///     .text("Don't forget me");
///
/// assert_eq!(
///     doc.to_xml(),
///     r#"<?xml version="1.0" encoding="UTF-8" ?><note lang="en"><to>Tove</to><body>Don't forget me</body></note>"#
/// );
/// ```
pub trait Builder {
    /// The current child list.
    fn nodes(&self) -> &[Node];

    /// Mutable access to the child list.
    fn nodes_mut(&mut self) -> &mut Vec<Node>;

    /// Append an already built node.
    fn push_node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes_mut().push(node.into());
        self
    }

    /// Append a new empty element and return a handle to it.
    fn element(&mut self, name: impl Into<CompactString>) -> &mut Element {
        let nodes = self.nodes_mut();
        nodes.push(Node::Element(Element::new(name)));
        match nodes.last_mut() {
            Some(Node::Element(element)) => element,
            _ => unreachable!("an element was just pushed"),
        }
    }

    /// Append a new element, let `build` fill it in, and return `self` so
    /// siblings can be chained.
    fn element_with(
        &mut self,
        name: impl Into<CompactString>,
        build: impl FnOnce(&mut Element),
    ) -> &mut Self {
        build(self.element(name));
        self
    }

    /// Append a new element carrying the given catalogue flags.
    fn tagged(&mut self, name: impl Into<CompactString>, traits: TagTraits) -> &mut Element {
        let element = self.element(name);
        traits.apply(element);
        element
    }

    /// Append a text node. Adjacent text nodes are kept separate.
    fn text(&mut self, value: impl Into<String>) -> &mut Self {
        self.nodes_mut().push(Node::Text(value.into()));
        self
    }

    /// Append copies of every top-level node of `other`, in order.
    fn append_document<B: Builder + ?Sized>(&mut self, other: &B) -> &mut Self {
        self.nodes_mut().extend_from_slice(other.nodes());
        self
    }

    /// Detach and return the current children, leaving the list empty.
    fn take_nodes(&mut self) -> Vec<Node> {
        std::mem::take(self.nodes_mut())
    }
}

impl Builder for Element {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

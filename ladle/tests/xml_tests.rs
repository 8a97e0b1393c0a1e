use facet_testhelpers::test;
use ladle::xml::{self, Document, PROLOGUE};
use ladle::{Builder, Element, Node};

fn person() -> Document {
    let mut doc = Document::new();
    let person = doc.element("person");
    person.set_attribute("verified", "true");
    person.element("name").text("Alice");
    let address = person.element("address");
    address.element("city").text("Foo Town");
    let street = address.element("street");
    street.text("Foo");
    street.element("strong").text("Street");
    address.element("bla").self_closing();
    doc
}

#[test]
fn test_person_compact() {
    assert_eq!(
        xml::generate(&person(), ""),
        r#"<?xml version="1.0" encoding="UTF-8" ?><person verified="true"><name>Alice</name><address><city>Foo Town</city><street>Foo<strong>Street</strong></street><bla /></address></person>"#
    );
}

#[test]
fn test_person_pretty() {
    let expected = format!(
        "{PROLOGUE}\n\
         <person verified=\"true\">\n\
         \x20 <name>Alice</name>\n\
         \x20 <address>\n\
         \x20   <city>Foo Town</city>\n\
         \x20   <street>Foo<strong>Street</strong></street>\n\
         \x20   <bla />\n\
         \x20 </address>\n\
         </person>\n"
    );
    assert_eq!(xml::generate(&person(), "  "), expected);
}

#[test]
fn test_text_siblings_disable_indentation_for_any_indent() {
    let mut doc = Document::new();
    let root = doc.element("root");
    root.element("a").text("1");
    root.text("between");
    root.element("b").text("2");

    let compact = xml::generate(&doc, "");
    let body = compact.strip_prefix(PROLOGUE).unwrap();
    for indent in ["  ", "\t", "----"] {
        let pretty = xml::generate(&doc, indent);
        assert_eq!(pretty, format!("{PROLOGUE}\n{body}\n"));
    }
}

#[test]
fn test_self_closing_with_children_renders_pair() {
    let mut doc = Document::new();
    let bla = doc.element("bla");
    bla.self_closing();
    bla.element("child");

    assert_eq!(doc.to_xml(), format!("{PROLOGUE}<bla><child></child></bla>"));
}

#[test]
fn test_take_nodes_moves_subtree() {
    let mut doc = Document::new();
    let source = doc.element("source");
    source.element("a");
    source.element("b");
    source.text("c");

    let moved = source.take_nodes();
    assert_eq!(moved.len(), 3);
    assert!(source.nodes().is_empty());

    let mut target = Element::new("target");
    for node in moved {
        target.push_node(node);
    }
    doc.push_node(target);

    assert_eq!(
        doc.to_xml(),
        format!("{PROLOGUE}<source></source><target><a></a><b></b>c</target>")
    );
}

#[test]
fn test_append_document_splices_fragment() {
    let mut fragment = Document::new();
    fragment.element("item").text("1");
    fragment.element("item").text("2");

    let mut doc = Document::new();
    doc.element("list").append_document(&fragment);

    assert_eq!(
        doc.to_xml(),
        format!("{PROLOGUE}<list><item>1</item><item>2</item></list>")
    );
    assert_eq!(fragment.nodes().len(), 2);
}

#[test]
fn test_attribute_overwrite_position_in_output() {
    let mut doc = Document::new();
    doc.element("e")
        .set_attribute("a", "1")
        .set_attribute("b", "2")
        .set_attribute("a", "3");

    assert_eq!(doc.to_xml(), format!("{PROLOGUE}<e a=\"3\" b=\"2\"></e>"));
}

#[test]
fn test_text_is_not_reflowed() {
    let mut doc = Document::new();
    doc.element("pre").text("  line one\n    line two\n");

    assert_eq!(
        doc.to_xml_pretty(),
        format!("{PROLOGUE}\n<pre>  line one\n    line two\n</pre>\n")
    );
}

#[test]
fn test_display_is_compact() {
    let mut doc = Document::new();
    doc.element("a").element("b");
    assert_eq!(doc.to_string(), doc.to_xml());
    assert!(matches!(doc.nodes()[0], Node::Element(_)));
}

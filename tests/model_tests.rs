#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use loosexml::{CData, Comment, Document, Element, Node, PrologNode};

#[test]
fn test_template_composition() {
    let template = Element::new("row")
        .with_attribute("class", "base")
        .with_attribute("visible", "yes")
        .with_child(Element::new("cell"));
    let snapshot = template.clone();

    let child = Node::from(Comment::new("added"));
    let built = template.with([child.clone()], [("class", "override")]);

    let mut expected_attrs = snapshot.attributes.clone();
    expected_attrs.insert("class".to_string(), "override".to_string());
    assert_eq!(built.attributes, expected_attrs);

    let mut expected_children = snapshot.children.clone();
    expected_children.push(child);
    assert_eq!(built.children, expected_children);

    assert_eq!(built.tag, "row");
    assert!(built.closed);
    assert_eq!(template, snapshot);
}

#[test]
fn test_template_without_overrides_is_a_copy() {
    let template = Element::new("x").with_attribute("a", "1");
    let copy = template.with(Vec::<Node>::new(), Vec::<(String, String)>::new());
    assert_eq!(copy, template);
}

#[test]
fn test_equality_is_structural() {
    let left = Element::new("p")
        .with_attribute("a", "1")
        .with_attribute("b", "2")
        .with_child("t")
        .with_child(CData::new("d"));
    let right = Element::new("p")
        .with_attribute("b", "2")
        .with_attribute("a", "1")
        .with_child("t")
        .with_child(CData::new("d"));
    assert_eq!(left, right);

    let reordered = Element::new("p")
        .with_attribute("a", "1")
        .with_attribute("b", "2")
        .with_child(CData::new("d"))
        .with_child("t");
    assert_ne!(left, reordered);

    let mut changed = left.clone();
    changed.set_attribute("a", "9");
    assert_ne!(left, changed);
}

#[test]
fn test_payload_equality() {
    assert_eq!(Comment::new("x"), Comment::new("x"));
    assert_ne!(Comment::new("x"), Comment::new("y"));
    assert_eq!(CData::new("x"), CData::new("x"));
    assert_ne!(Node::from(Comment::new("x")), Node::from(CData::new("x")));
}

#[test]
fn test_nodes_are_mutable() {
    let mut doc = Document::new(Element::new("root").with_child(Comment::new("old")));
    if let Some(Node::Comment(comment)) = doc.root.children.first_mut() {
        comment.data = "new".to_string();
    }
    doc.prolog.push(PrologNode::from(CData::new("pre")));

    assert_eq!(doc.root.children, vec![Node::from(Comment::new("new"))]);
    assert_eq!(doc.prolog().len(), 1);
}

#[test]
fn test_display_uses_default_indent() {
    let element = Element::new("a").with_child(Element::new("b").with_child("c"));
    assert_eq!(element.to_string(), "<a>\n  <b>c</b>\n</a>\n");
    assert_eq!(Node::from(Comment::new("hi")).to_string(), "<!-- hi -->\n");
    assert_eq!(
        PrologNode::from(Element::prolog("!DOCTYPE")).to_string(),
        "<!DOCTYPE>\n"
    );
}

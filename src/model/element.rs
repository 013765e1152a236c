use std::fmt;

use indexmap::IndexMap;

use super::Node;
use crate::formatter::{FormatConfig, XmlFormatter};

/// XML element
///
/// Attribute order is kept for output but ignored by `==`. A non-closed
/// element stands for a prolog construct such as `<?xml ...?>` or
/// `<!DOCTYPE ...>` and never has children or an end tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
    pub closed: bool,
}

impl Element {
    /// Create an empty, closed element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            closed: true,
        }
    }

    /// Create a prolog pseudo-element (no end tag)
    pub fn prolog(tag: impl Into<String>) -> Self {
        Self {
            closed: false,
            ..Self::new(tag)
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Use this element as a template: returns a new element with `children`
    /// appended after the existing ones and `attributes` merged in, overrides
    /// winning on key collision. `self` is left untouched.
    pub fn with<C, A, K, V>(&self, children: C, attributes: A) -> Self
    where
        C: IntoIterator,
        C::Item: Into<Node>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut element = self.clone();
        element
            .attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        element
            .children
            .extend(children.into_iter().map(Into::into));
        element
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Insert or replace an attribute, returning the previous value
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Direct child elements, in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First direct child element named `tag`
    pub fn find(&self, tag: &str) -> Option<&Self> {
        self.child_elements().find(|child| child.tag == tag)
    }

    pub fn find_mut(&mut self, tag: &str) -> Option<&mut Self> {
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find(|child| child.tag == tag)
    }

    /// First text child
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(Node::as_text)
    }

    pub fn is_prolog(&self) -> bool {
        self.tag.starts_with(['?', '!'])
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&XmlFormatter.format_element(self, 1, &FormatConfig::default()))
    }
}

//! XML data model

mod document;
mod element;

pub use document::Document;
pub use element::Element;

use std::fmt;

use crate::formatter::{FormatConfig, XmlFormatter};

/// `<!-- ... -->`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comment {
    pub data: String,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// `<![CDATA[...]]>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CData {
    pub data: String,
}

impl CData {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Child of an element
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(String),
    Comment(Comment),
    CData(CData),
    Element(Element),
}

impl Node {
    /// Raw text node
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<CData> for Node {
    fn from(cdata: CData) -> Self {
        Self::CData(cdata)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Entry of a document prolog. Raw text never appears before the root.
#[derive(Clone, Debug, PartialEq)]
pub enum PrologNode {
    Element(Element),
    Comment(Comment),
    CData(CData),
}

impl PrologNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for PrologNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Comment> for PrologNode {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<CData> for PrologNode {
    fn from(cdata: CData) -> Self {
        Self::CData(cdata)
    }
}

impl From<PrologNode> for Node {
    fn from(node: PrologNode) -> Self {
        match node {
            PrologNode::Element(element) => Self::Element(element),
            PrologNode::Comment(comment) => Self::Comment(comment),
            PrologNode::CData(cdata) => Self::CData(cdata),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&XmlFormatter.format_node(self, 1, &FormatConfig::default()))
    }
}

impl fmt::Display for PrologNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&XmlFormatter.format_prolog_node(self, &FormatConfig::default()))
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<!-- {} -->", self.data)
    }
}

impl fmt::Display for CData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<![CDATA[{}]]>", self.data)
    }
}

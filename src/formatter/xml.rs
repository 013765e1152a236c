use std::io;

use super::{FormatConfig, Formatter};
use crate::model::{CData, Comment, Document, Element, Node, PrologNode};

/// Pretty printer: one node per line, re-indented by depth
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> String {
        let mut out = String::new();
        for node in &document.prolog {
            Self::push_prolog_node(&mut out, node, config);
        }
        Self::push_element(&mut out, &document.root, 1, config);
        out
    }
}

impl XmlFormatter {
    /// Render a single element as if it sat at `depth` (root is 1)
    pub fn format_element(&self, element: &Element, depth: usize, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::push_element(&mut out, element, depth, config);
        out
    }

    pub fn format_node(&self, node: &Node, depth: usize, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::push_node(&mut out, node, depth, config);
        out
    }

    pub fn format_prolog_node(&self, node: &PrologNode, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::push_prolog_node(&mut out, node, config);
        out
    }

    /// Stream a document into `writer`, one top-level node at a time
    pub fn write_document<W: io::Write>(
        &self,
        document: &Document,
        config: &FormatConfig,
        writer: &mut W,
    ) -> io::Result<()> {
        for node in &document.prolog {
            writer.write_all(self.format_prolog_node(node, config).as_bytes())?;
        }
        writer.write_all(self.format_element(&document.root, 1, config).as_bytes())?;
        writer.flush()
    }

    fn push_prolog_node(out: &mut String, node: &PrologNode, config: &FormatConfig) {
        match node {
            PrologNode::Element(element) => Self::push_element(out, element, 1, config),
            PrologNode::Comment(comment) => Self::push_comment(out, comment, 1, config),
            PrologNode::CData(cdata) => Self::push_cdata(out, cdata, 1, config),
        }
    }

    fn push_node(out: &mut String, node: &Node, depth: usize, config: &FormatConfig) {
        match node {
            Node::Text(text) => {
                out.push_str(&config.indentation(depth));
                out.push_str(text);
                out.push('\n');
            }
            Node::Comment(comment) => Self::push_comment(out, comment, depth, config),
            Node::CData(cdata) => Self::push_cdata(out, cdata, depth, config),
            Node::Element(element) => Self::push_element(out, element, depth, config),
        }
    }

    fn push_comment(out: &mut String, comment: &Comment, depth: usize, config: &FormatConfig) {
        out.push_str(&config.indentation(depth));
        out.push_str(&comment.to_string());
        out.push('\n');
    }

    fn push_cdata(out: &mut String, cdata: &CData, depth: usize, config: &FormatConfig) {
        out.push_str(&config.indentation(depth));
        out.push_str(&cdata.to_string());
        out.push('\n');
    }

    fn push_element(out: &mut String, element: &Element, depth: usize, config: &FormatConfig) {
        let indent = config.indentation(depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&element.tag);
        for (key, value) in &element.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }

        if !element.closed {
            out.push_str(">\n");
            return;
        }

        match element.children.as_slice() {
            [] if element.tag.starts_with('?') => out.push_str(" ?>\n"),
            [] => out.push_str(" />\n"),
            [Node::Text(text)] if !text.contains('\n') => {
                out.push('>');
                out.push_str(text);
                Self::push_end_tag(out, &element.tag);
            }
            [Node::Text(text)] => {
                out.push_str(">\n");
                out.push_str(&config.indentation(depth + 1));
                out.push_str(text);
                out.push('\n');
                out.push_str(&indent);
                Self::push_end_tag(out, &element.tag);
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    Self::push_node(out, child, depth + 1, config);
                }
                out.push_str(&indent);
                Self::push_end_tag(out, &element.tag);
            }
        }
    }

    fn push_end_tag(out: &mut String, tag: &str) {
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
}

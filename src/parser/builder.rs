//! Builds a `Document` out of a chunk sequence
//!
//! The path stack holds the elements that have not been attached to their
//! parent yet, outermost first. An element is moved into its parent once the
//! stack is settled below its depth: when a sibling or shallower tag opens,
//! when content lands in an ancestor, or at the end of input.

use tracing::{debug, trace, warn};

use super::config::{ParserConfig, ParsingContext};
use super::tag::{
    cdata_body, comment_body, is_cdata, is_closing, is_comment, is_declaration, parse_tag,
};
use crate::error::{Error, ErrorKind, Result};
use crate::model::{CData, Comment, Document, Element, Node, PrologNode};

#[derive(Debug)]
pub struct TreeBuilder<'c> {
    config: &'c ParserConfig,
    ctx: ParsingContext,
    prolog: Vec<PrologNode>,
    stack: Vec<Element>,
}

impl<'c> TreeBuilder<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            ctx: ParsingContext::new(),
            prolog: Vec::new(),
            stack: Vec::new(),
        }
    }

    pub fn feed(&mut self, chunk: &str) -> Result<()> {
        self.ctx.add_chunk(chunk, self.config)?;

        // text before the first `<` is never markup
        if self.ctx.chunk_index() == 0 || chunk.trim().is_empty() {
            return Ok(());
        }
        trace!(index = self.ctx.chunk_index(), depth = self.ctx.depth(), "chunk");

        if self.stack.is_empty() {
            self.feed_prolog(chunk)
        } else {
            self.feed_tree(chunk)
        }
    }

    pub fn finish(mut self) -> Result<Document> {
        self.settle(1);
        let root = self
            .stack
            .pop()
            .ok_or_else(|| Error::new(ErrorKind::NoRootElement))?;
        debug!(
            root = %root.tag,
            prolog = self.prolog.len(),
            "document built"
        );
        Ok(Document {
            prolog: self.prolog,
            root,
        })
    }

    fn feed_prolog(&mut self, chunk: &str) -> Result<()> {
        if is_comment(chunk) {
            self.prolog.push(Comment::new(comment_body(chunk)).into());
        } else if is_cdata(chunk) {
            self.prolog.push(CData::new(cdata_body(chunk)).into());
        } else if is_declaration(chunk) {
            let tag = parse_tag(chunk);
            self.prolog.push(
                Element {
                    tag: tag.name,
                    attributes: tag.attributes,
                    children: Vec::new(),
                    closed: false,
                }
                .into(),
            );
        } else if is_closing(chunk) {
            warn!(index = self.ctx.chunk_index(), "closing tag before root element ignored");
        } else {
            self.open(chunk)?;
            debug!(root = ?self.stack.first().map(|root| &root.tag), "root element opened");
        }
        Ok(())
    }

    fn feed_tree(&mut self, chunk: &str) -> Result<()> {
        if self.ctx.depth() == 0 {
            warn!(index = self.ctx.chunk_index(), "content after root element ignored");
            return Ok(());
        }

        if is_comment(chunk) {
            self.append(Comment::new(comment_body(chunk)).into());
        } else if is_cdata(chunk) {
            self.append(CData::new(cdata_body(chunk)).into());
        } else if is_closing(chunk) {
            self.ctx.exit_nested();
        } else if is_declaration(chunk) {
            let tag = parse_tag(chunk);
            let closed = tag.name.starts_with('?');
            self.append(
                Element {
                    tag: tag.name,
                    attributes: tag.attributes,
                    children: Vec::new(),
                    closed,
                }
                .into(),
            );
        } else {
            self.open(chunk)?;
        }
        Ok(())
    }

    /// Place a new element one level below the current depth
    fn open(&mut self, chunk: &str) -> Result<()> {
        let tag = parse_tag(chunk);
        self.ctx.enter_nested(self.config)?;

        self.settle(self.ctx.depth().saturating_sub(1));
        self.stack.push(Element {
            tag: tag.name,
            attributes: tag.attributes,
            // text after `/>` belongs to no element
            children: match tag.text {
                Some(text) if !tag.self_closing => vec![Node::Text(text)],
                _ => Vec::new(),
            },
            closed: true,
        });

        if tag.self_closing {
            self.ctx.exit_nested();
        }
        Ok(())
    }

    /// Add a node to the innermost element still open
    fn append(&mut self, node: Node) {
        self.settle(self.ctx.depth());
        if let Some(parent) = self.stack.last_mut() {
            parent.push(node);
        }
    }

    /// Move finished elements into their parents until at most `depth`
    /// entries remain. The root always stays.
    fn settle(&mut self, depth: usize) {
        while self.stack.len() > depth.max(1) {
            if let Some(child) = self.stack.pop() {
                if let Some(parent) = self.stack.last_mut() {
                    parent.push(child);
                }
            }
        }
    }
}

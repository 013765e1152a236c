use std::fmt;

use super::{Element, PrologNode};
use crate::formatter::{FormatConfig, Formatter, XmlFormatter};

/// XML document: everything before the root, then the root itself
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub prolog: Vec<PrologNode>,
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
        }
    }

    pub fn with_prolog(mut self, node: impl Into<PrologNode>) -> Self {
        self.prolog.push(node.into());
        self
    }

    pub fn push_prolog(&mut self, node: impl Into<PrologNode>) {
        self.prolog.push(node.into());
    }

    pub fn prolog(&self) -> &[PrologNode] {
        &self.prolog
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&XmlFormatter.format(self, &FormatConfig::default()))
    }
}

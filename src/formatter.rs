mod xml;

pub use self::xml::XmlFormatter;
use crate::model::Document;

use parking_lot::{const_rwlock, RwLock};
use std::borrow::Cow;

/// Process-wide default indentation unit
static DEFAULT_INDENT: RwLock<Cow<'static, str>> = const_rwlock(Cow::Borrowed("  "));

/// Replace the indentation used by `FormatConfig::default()` from now on
pub fn set_default_indent(indent: impl Into<String>) {
    *DEFAULT_INDENT.write() = Cow::Owned(indent.into());
}

/// Current process-wide default indentation unit
pub fn default_indent() -> String {
    DEFAULT_INDENT.read().to_string()
}

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// String repeated once per nesting level
    pub indent: String,
}

/// Picks up the process-wide default indentation
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl FormatConfig {
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Indentation for a node at `depth` (the root is depth 1)
    pub fn indentation(&self, depth: usize) -> String {
        self.indent.repeat(depth.saturating_sub(1))
    }
}

/// Trait for rendering a document as text
pub trait Formatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> String;
}

//! loosexml: a permissive XML document model, parser and pretty printer
//!
//! This crate provides functionality to:
//! - Load a document from a string, a reader or a file into a mutable tree
//! - Inspect and edit elements, comments, CDATA sections and text
//! - Render the tree back as re-indented text
//!
//! It is not a conforming XML parser: entities, namespaces and DTDs are not
//! interpreted, and mismatched closing tags are accepted.
//!
//! # Examples
//! ```
//! use loosexml::{from_str, Result};
//!
//! fn example() -> Result<()> {
//!     let mut doc = from_str(r#"<?xml version="1.0"?><greeting>hi</greeting>"#)?;
//!     doc.root_mut().set_attribute("lang", "en");
//!     assert_eq!(
//!         loosexml::to_string(&doc),
//!         "<?xml version=\"1.0\">\n<greeting lang=\"en\">hi</greeting>\n"
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, error, info, instrument};

pub mod error;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod utils;

// Re-exports
pub use error::{Error, ErrorKind, Result};
pub use formatter::{default_indent, set_default_indent, FormatConfig, Formatter, XmlFormatter};
pub use model::{CData, Comment, Document, Element, Node, PrologNode};
pub use parser::{Parser, ParserConfig, ReaderChunks, StrChunks};

/// Parse a document from a string
pub fn from_str(input: &str) -> Result<Document> {
    Parser::new().parse_str(input)
}

/// Parse a document from a buffered reader, pulling one chunk at a time
pub fn from_reader<R: BufRead>(reader: R) -> Result<Document> {
    Parser::new().parse_reader(reader)
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    debug!("Starting to parse file");

    let document = Parser::new().parse_file(path.as_ref()).map_err(|e| {
        error!("Failed to parse file: {}", e);
        e
    })?;

    info!(root = %document.root.tag, "File parsed successfully");
    Ok(document)
}

/// Render with the process-wide default indentation
pub fn to_string(document: &Document) -> String {
    XmlFormatter.format(document, &FormatConfig::default())
}

pub fn to_string_with_config(document: &Document, config: &FormatConfig) -> String {
    XmlFormatter.format(document, config)
}

/// Render into any writable sink
pub fn to_writer<W: Write>(document: &Document, config: &FormatConfig, writer: &mut W) -> Result<()> {
    XmlFormatter.write_document(document, config, writer)?;
    Ok(())
}

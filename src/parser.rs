pub mod builder;
pub mod chunk;
pub mod config;
pub mod tag;

pub use builder::TreeBuilder;
pub use chunk::{ReaderChunks, StrChunks};
pub use config::ParserConfig;

use std::io::BufRead;
use std::path::Path;

use tracing::instrument;

use crate::error::Result;
use crate::model::Document;

/// Permissive XML parser
///
/// Input is split on `<` and each chunk is classified by its prefix. Closing
/// tag names are not checked against their openers and malformed attributes
/// are skipped, so this reader assumes trusted, mostly well-formed input.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Build a document from any chunk sequence. The sequence is dropped
    /// (and so released) as soon as parsing stops, on success or error.
    pub fn parse_chunks<I, S>(&self, chunks: I) -> Result<Document>
    where
        I: IntoIterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let mut builder = TreeBuilder::new(&self.config);
        for chunk in chunks {
            builder.feed(chunk?.as_ref())?;
        }
        builder.finish()
    }

    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn parse_str(&self, input: &str) -> Result<Document> {
        self.parse_chunks(StrChunks::new(input).map(Ok))
    }

    #[instrument(level = "debug", skip_all)]
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document> {
        self.parse_chunks(ReaderChunks::new(reader).max_size(self.config.max_size))
    }

    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        self.parse_chunks(ReaderChunks::open(path)?.max_size(self.config.max_size))
    }
}

use crate::error::{Error, ErrorKind, Result};

pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024; // 64MB

/// Configuration for parser limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Tracks nesting depth and consumed input during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    depth: usize,
    size: usize,
    chunks: usize,
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Index of the chunk currently being handled
    pub fn chunk_index(&self) -> usize {
        self.chunks.saturating_sub(1)
    }

    /// Account for one chunk plus the `<` that delimited it
    pub fn add_chunk(&mut self, chunk: &str, config: &ParserConfig) -> Result<()> {
        self.chunks += 1;
        self.size = self.size.saturating_add(chunk.len() + 1);
        if self.size > config.max_size {
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: config.max_size,
                },
                self.chunk_index(),
            ));
        }
        Ok(())
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.depth += 1;
        if self.depth > config.max_depth {
            return Err(Error::at(
                ErrorKind::MaxDepthExceeded {
                    max: config.max_depth,
                },
                self.chunk_index(),
            ));
        }
        Ok(())
    }

    /// Closing tags past the root are ignored
    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

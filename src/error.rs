//! Error types for loosexml

use std::{fmt, io};
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("no root element")]
    NoRootElement,

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },

    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
}

/// Main error type for loosexml
#[derive(Debug, Error)]
pub struct Error {
    kind: ErrorKind,
    chunk: Option<usize>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, chunk: None }
    }

    /// Create error raised while handling the chunk at `index`
    pub fn at(kind: ErrorKind, index: usize) -> Self {
        Self {
            kind,
            chunk: Some(index),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Index of the offending chunk, if known
    pub fn chunk(&self) -> Option<usize> {
        self.chunk
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk {
            Some(index) => write!(f, "error at chunk {index}: {}", self.kind),
            None => write!(f, "error: {}", self.kind),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Result type alias for loosexml
pub type Result<T> = std::result::Result<T, Error>;

//! Chunk sources: input split on `<`, produced lazily
//!
//! The first chunk is whatever precedes the first `<` (usually empty). The
//! delimiter itself belongs to no chunk.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::Split;

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};

const DELIMITER: u8 = b'<';

/// Chunks of an in-memory string
#[derive(Debug, Clone)]
pub struct StrChunks<'a> {
    inner: Split<'a, char>,
}

impl<'a> StrChunks<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split(char::from(DELIMITER)),
        }
    }
}

impl<'a> Iterator for StrChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// Chunks read on demand from a byte stream
///
/// The reader is dropped and the release hook runs exactly once: when the
/// stream is exhausted, on the first read error, or when the iterator is
/// dropped early. After that the iterator only returns `None`.
///
/// With [`ReaderChunks::max_size`] set, reads never buffer more than one
/// byte past the limit.
pub struct ReaderChunks<R> {
    reader: Option<R>,
    buf: Vec<u8>,
    /// A chunk is still owed even if the next read hits EOF
    pending: bool,
    on_release: Option<ReleaseHook>,
    max_size: Option<usize>,
    consumed: usize,
    index: usize,
}

impl<R> ReaderChunks<R> {
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            debug!(chunks = self.index, bytes = self.consumed, "chunk source released");
            if let Some(hook) = self.on_release.take() {
                hook();
            }
        }
    }
}

impl<R: BufRead> ReaderChunks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            buf: Vec::new(),
            pending: true,
            on_release: None,
            max_size: None,
            consumed: 0,
            index: 0,
        }
    }

    /// Fail with `MaxSizeExceeded` once more than `max` bytes were read
    pub fn max_size(mut self, max: usize) -> Self {
        self.max_size = Some(max);
        self
    }

    /// Run `hook` once the underlying reader has been released
    pub fn on_release(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    fn read_chunk(&mut self) -> Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.buf.clear();
        let read = match self.max_size {
            Some(max) => {
                let budget = max.saturating_sub(self.consumed).saturating_add(1);
                let budget = u64::try_from(budget).unwrap_or(u64::MAX);
                reader.by_ref().take(budget).read_until(DELIMITER, &mut self.buf)?
            }
            None => reader.read_until(DELIMITER, &mut self.buf)?,
        };
        self.consumed = self.consumed.saturating_add(read);
        if let Some(max) = self.max_size.filter(|&max| self.consumed > max) {
            return Err(Error::at(ErrorKind::MaxSizeExceeded { max }, self.index));
        }
        if read == 0 {
            self.release();
            return Ok(std::mem::take(&mut self.pending).then(String::new));
        }

        self.pending = self.buf.last() == Some(&DELIMITER);
        if self.pending {
            self.buf.pop();
        }

        let chunk = String::from_utf8(std::mem::take(&mut self.buf))
            .map_err(|_| Error::new(ErrorKind::InvalidUtf8))?;
        trace!(index = self.index, len = chunk.len(), "read chunk");
        self.index += 1;
        Ok(Some(chunk))
    }
}

impl ReaderChunks<BufReader<File>> {
    /// Open `path` and read it chunk by chunk; the file is closed on release
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for ReaderChunks<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_chunk() {
            Ok(chunk) => chunk.map(Ok),
            Err(err) => {
                self.release();
                Some(Err(err))
            }
        }
    }
}

impl<R> Drop for ReaderChunks<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R> fmt::Debug for ReaderChunks<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderChunks")
            .field("released", &self.reader.is_none())
            .field("pending", &self.pending)
            .field("max_size", &self.max_size)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

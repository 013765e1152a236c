use crate::{
    error::Result,
    formatter::{FormatConfig, XmlFormatter},
    model::Document,
};
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
};
use tracing::error;

pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        error!("Cannot read file {}: {}", path.display(), e);
        e.into()
    })
}

/// Pretty print `document` into the file at `path`, replacing it
pub fn write_file(path: impl AsRef<Path>, document: &Document, config: &FormatConfig) -> Result<()> {
    let path = path.as_ref();
    let log_failure = |e: io::Error| {
        error!("Cannot write to file {}: {}", path.display(), e);
        e
    };
    let file = File::create(path).map_err(log_failure)?;
    let mut writer = BufWriter::new(file);
    XmlFormatter
        .write_document(document, config, &mut writer)
        .map_err(log_failure)?;
    Ok(())
}

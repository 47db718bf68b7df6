//! Writes exported menu documents to disk.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes exported document text to `path`, replacing any existing file.
pub fn write_export(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .with_context(|| format!("Failed to write menu to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

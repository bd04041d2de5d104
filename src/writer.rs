//! JSON output for chunk files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Write a chunk list as pretty-printed JSON.
///
/// Creates parent directories as needed. The file holds a single JSON
/// array so downstream indexing can load it in one pass.
///
/// # Errors
/// Returns IO or serialization errors.
pub fn save_chunks<T: Serialize>(chunks: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chunks)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

//! Loading of scraped law data files.

use std::fs;
use std::path::Path;

use crate::error::{ChunkerError, Result};
use crate::types::LawData;

/// Load a law data JSON file.
///
/// # Errors
/// Returns [`ChunkerError::Io`] when the file cannot be read,
/// [`ChunkerError::LawFileParse`] when it is not valid `LawData` JSON,
/// and [`ChunkerError::NoArticles`] when its articles list is empty.
pub fn load_law_file(path: &Path) -> Result<LawData> {
    let raw = fs::read_to_string(path)?;

    let law: LawData =
        serde_json::from_str(&raw).map_err(|source| ChunkerError::LawFileParse {
            path: path.display().to_string(),
            source,
        })?;

    if law.articles.is_empty() {
        return Err(ChunkerError::NoArticles {
            path: path.display().to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        title = %law.title,
        articles = law.articles.len(),
        "Loaded law data file"
    );

    Ok(law)
}

//! Error types for the chunker.
//!
//! A single `ChunkerError` enum serves library consumers with detailed
//! error context; internal code converts into it with `?`.

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Number outside the domain of the Chinese numeral formatter.
    ///
    /// Citation correctness is load-bearing, so out-of-range input is
    /// rejected instead of truncated.
    #[error("Cannot format {0} as a legal Chinese numeral (supported range 0-999)")]
    NumeralOutOfRange(u64),

    /// An article arrived without an article number.
    #[error("Article '{article_id}' has an empty article_no")]
    EmptyArticleNumber { article_id: String },

    /// Law data file could not be parsed as JSON.
    #[error("Failed to parse law data file {path}: {source}")]
    LawFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Law data file contained no articles array.
    #[error("Law data file {path} contains no articles")]
    NoArticles { path: String },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;

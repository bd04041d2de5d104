//! Labor-Law Chunker - split Taiwanese statutory articles into citable passages.
//!
//! This crate ingests scraped law data files (Labor Standards Act and
//! its subsidiary regulations) and cuts each article into addressable,
//! independently retrievable chunks while preserving legal citation
//! semantics (article/paragraph/sub-paragraph numbering).
//!
//! # Example
//!
//! ```
//! use twlabor_chunker::chunking::chinese_numeral;
//!
//! assert_eq!(chinese_numeral(23).unwrap(), "二十三");
//! assert_eq!(chinese_numeral(84).unwrap(), "八十四");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants
//! - [`types`]: Law data types (`LawData`, `RawLawArticle`)
//! - [`error`]: Error types and Result alias
//! - [`chunking`]: Hierarchical segmentation, citation formatting, chunk assembly
//! - [`loader`]: Law data file loading
//! - [`chunker`]: Batch chunking service
//! - [`writer`]: JSON chunk output
//! - [`cli`]: Command-line interface

pub mod chunker;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod types;
pub mod writer;

// Re-export main entry points
pub use chunker::{chunk_law, chunk_law_files, ChunkReport};
pub use chunking::{
    ChunkEngine, CoarseGrained, FineGrained, LawChunk, LawChunkCoarse, LawChunkFine,
    SplitStrategy,
};
pub use error::{ChunkerError, Result};
pub use types::{LawCategory, LawData, RawLawArticle};

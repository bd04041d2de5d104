//! Batch chunking service that ties loading and segmentation together.
//!
//! One granularity policy is chosen per run and applied to every
//! article of every law file; a malformed article is skipped with a
//! warning rather than aborting the batch.

use std::path::Path;

use crate::chunking::{ChunkEngine, GranularityPolicy, LawChunk};
use crate::error::Result;
use crate::loader::load_law_file;
use crate::types::LawData;

/// Result of a batch chunking run.
#[derive(Debug)]
pub struct ChunkReport<H> {
    /// All chunks, in law-file and article order.
    pub chunks: Vec<LawChunk<H>>,

    /// Non-fatal problems encountered, one entry per skipped article.
    pub warnings: Vec<String>,
}

/// Chunk every article of one law under the engine's policy.
///
/// Returns `(chunks, warnings)`; articles that fail to chunk are
/// reported in the warnings and skipped.
#[must_use]
pub fn chunk_law<P: GranularityPolicy>(
    law: &LawData,
    engine: &ChunkEngine<P>,
) -> (Vec<LawChunk<P::Hierarchy>>, Vec<String>) {
    let mut chunks = Vec::new();
    let mut warnings = Vec::new();

    for article in &law.articles {
        match engine.chunk_article(article) {
            Ok(article_chunks) => chunks.extend(article_chunks),
            Err(e) => {
                tracing::warn!(article_id = %article.id, error = %e, "Skipping article");
                warnings.push(format!("Article {}: {e}", article.id));
            }
        }
    }

    (chunks, warnings)
}

/// Load and chunk a list of law data files under one policy.
///
/// # Errors
/// Propagates file-level errors (unreadable or malformed law files);
/// article-level failures only produce warnings.
pub fn chunk_law_files<P: GranularityPolicy>(
    paths: &[impl AsRef<Path>],
    policy: P,
) -> Result<ChunkReport<P::Hierarchy>> {
    let engine = ChunkEngine::new(policy);
    let mut report = ChunkReport {
        chunks: Vec::new(),
        warnings: Vec::new(),
    };

    for path in paths {
        let law = load_law_file(path.as_ref())?;
        let (chunks, warnings) = chunk_law(&law, &engine);

        tracing::info!(
            path = %path.as_ref().display(),
            title = %law.title,
            chunks = chunks.len(),
            "Chunked law file"
        );

        report.chunks.extend(chunks);
        report.warnings.extend(warnings);
    }

    Ok(report)
}

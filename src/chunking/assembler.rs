//! Chunk assembly: turn a segmentation draft into the persisted record.

use super::citation::citation_title;
use super::types::{ArticleContext, ChunkDraft, ChunkMetadata, HierarchyAddress, LawChunk};
use crate::error::Result;

/// Assemble a persisted chunk from one draft.
///
/// Attaches the citation title, constructs the chunk ID from the
/// hierarchy address, and copies the article-level passthrough fields.
/// Chunk IDs are unique within one article's output set by construction
/// because each (paragraph, subparagraph) pair is visited at most once.
///
/// # Errors
/// Propagates citation formatting errors.
pub fn assemble<H: HierarchyAddress>(
    context: &ArticleContext<'_>,
    draft: ChunkDraft<H>,
) -> Result<LawChunk<H>> {
    let citation = citation_title(&draft.hierarchy)?;
    let chunk_id = draft.hierarchy.chunk_id(context.parent_id);

    Ok(LawChunk {
        chunk_id,
        parent_id: context.parent_id.to_string(),
        text: draft.text,
        metadata: ChunkMetadata {
            url: context.url.to_string(),
            split_strategy: draft.split_strategy,
            is_expanded: draft.is_expanded,
            citation_title: citation,
            hierarchy: draft.hierarchy,
            chapter_no: context.chapter_no,
            chapter_title: context.chapter_title.map(String::from),
            article_no: context.article_no.to_string(),
        },
    })
}

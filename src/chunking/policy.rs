//! Granularity policies for article chunking.
//!
//! A policy decides how far one paragraph-level block is split and
//! which address shape its chunks carry. The fine-grained policy runs
//! the sub-item pass and may emit contextually expanded chunks; the
//! coarse-grained policy stops at paragraph level and its hierarchy
//! type has no subparagraph slot.

use super::markers::find_enumerated_items;
use super::types::{ChunkDraft, HierarchyAddress, HierarchyCoarse, HierarchyFine, SplitStrategy};

/// Trait for configurable chunking granularity.
///
/// One policy is selected per processing run and threaded through for
/// every article in that run; mixing policies within a run breaks
/// downstream grouping by parent.
pub trait GranularityPolicy {
    /// Address shape produced by this policy.
    type Hierarchy: HierarchyAddress + Clone;

    /// Chunk one paragraph-level block (or the whole article when no
    /// numbered paragraphs were found, in which case `paragraph` is
    /// `None`).
    fn chunk_block(
        &self,
        text: &str,
        article_no: &str,
        paragraph: Option<u32>,
    ) -> Vec<ChunkDraft<Self::Hierarchy>>;
}

/// Full recursive splitting: paragraphs, then enumerated sub-items with
/// contextual expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FineGrained;

impl GranularityPolicy for FineGrained {
    type Hierarchy = HierarchyFine;

    fn chunk_block(
        &self,
        text: &str,
        article_no: &str,
        paragraph: Option<u32>,
    ) -> Vec<ChunkDraft<HierarchyFine>> {
        if let Some((preamble, items)) = find_enumerated_items(text) {
            let strategy = if paragraph.is_some() {
                SplitStrategy::NumericContextual
            } else {
                SplitStrategy::Contextual
            };

            return items
                .into_iter()
                .map(|item| ChunkDraft {
                    // Contextual expansion: every item repeats the shared
                    // preamble so it reads as a standalone passage
                    text: format!("{preamble}{}", item.text),
                    hierarchy: HierarchyFine {
                        article: article_no.to_string(),
                        paragraph,
                        subparagraph: Some(item.ordinal),
                    },
                    split_strategy: strategy,
                    is_expanded: true,
                })
                .collect();
        }

        vec![ChunkDraft {
            text: text.trim().to_string(),
            hierarchy: HierarchyFine {
                article: article_no.to_string(),
                paragraph,
                subparagraph: None,
            },
            split_strategy: block_strategy(paragraph),
            is_expanded: false,
        }]
    }
}

/// Paragraph-level splitting only; the sub-item pass is skipped
/// entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoarseGrained;

impl GranularityPolicy for CoarseGrained {
    type Hierarchy = HierarchyCoarse;

    fn chunk_block(
        &self,
        text: &str,
        article_no: &str,
        paragraph: Option<u32>,
    ) -> Vec<ChunkDraft<HierarchyCoarse>> {
        vec![ChunkDraft {
            text: text.trim().to_string(),
            hierarchy: HierarchyCoarse {
                article: article_no.to_string(),
                paragraph,
            },
            split_strategy: block_strategy(paragraph),
            is_expanded: false,
        }]
    }
}

/// Strategy for a block that was not split further.
fn block_strategy(paragraph: Option<u32>) -> SplitStrategy {
    if paragraph.is_some() {
        SplitStrategy::Numeric
    } else {
        SplitStrategy::Atomic
    }
}

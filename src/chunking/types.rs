//! Types for the chunking system.

use serde::{Deserialize, Serialize};

use crate::types::RawLawArticle;

/// How a chunk was split out of its article.
///
/// The four cases are exhaustive by the recursion structure:
/// {numbered paragraph found?} × {enumerated sub-item found?}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Whole article, no markers found.
    Atomic,

    /// One numbered paragraph `(n)`, no sub-items.
    Numeric,

    /// Enumerated sub-item at top level, preamble prepended.
    Contextual,

    /// Enumerated sub-item nested inside a numbered paragraph.
    NumericContextual,
}

impl SplitStrategy {
    /// Get the string value as serialized in chunk output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Numeric => "numeric",
            Self::Contextual => "contextual",
            Self::NumericContextual => "numeric_contextual",
        }
    }
}

/// Positional address of a chunk within its article.
///
/// The two granularity policies produce genuinely different address
/// shapes ([`HierarchyFine`] and [`HierarchyCoarse`]); this trait is the
/// seam that lets citation formatting and chunk-ID construction work
/// over both.
pub trait HierarchyAddress {
    /// Article number string (copy of `article_no`, possibly hyphenated).
    fn article(&self) -> &str;

    /// Paragraph number, present when the chunk came from a `(n)` block.
    fn paragraph(&self) -> Option<u32>;

    /// Sub-paragraph ordinal, present when the chunk came from an
    /// enumerated item. Coarse addresses have no such slot.
    fn subparagraph(&self) -> Option<u32>;

    /// Construct the chunk ID for this address under `parent_id`.
    ///
    /// The whole-article atomic chunk reuses the article's own ID;
    /// downstream indexing renames it if that collides with a reserved
    /// namespace.
    fn chunk_id(&self, parent_id: &str) -> String {
        match (self.paragraph(), self.subparagraph()) {
            (None, None) => parent_id.to_string(),
            (Some(p), None) => format!("{parent_id}_P{p}"),
            (None, Some(s)) => format!("{parent_id}_S{s}"),
            (Some(p), Some(s)) => format!("{parent_id}_P{p}_S{s}"),
        }
    }
}

/// Full address shape used by the fine-grained policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyFine {
    pub article: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subparagraph: Option<u32>,
}

impl HierarchyAddress for HierarchyFine {
    fn article(&self) -> &str {
        &self.article
    }

    fn paragraph(&self) -> Option<u32> {
        self.paragraph
    }

    fn subparagraph(&self) -> Option<u32> {
        self.subparagraph
    }
}

/// Narrower address shape used by the coarse-grained policy.
///
/// Structurally omits the subparagraph slot; it is not a fine address
/// with a defaulted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyCoarse {
    pub article: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<u32>,
}

impl HierarchyAddress for HierarchyCoarse {
    fn article(&self) -> &str {
        &self.article
    }

    fn paragraph(&self) -> Option<u32> {
        self.paragraph
    }

    fn subparagraph(&self) -> Option<u32> {
        None
    }
}

/// Metadata attached to every persisted chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata<H> {
    /// URL of the originating article.
    pub url: String,

    /// How this chunk was split out of the article.
    pub split_strategy: SplitStrategy,

    /// True iff the chunk text is a contextual expansion (shared
    /// preamble prepended to an enumerated item).
    pub is_expanded: bool,

    /// Human-readable legal citation, e.g. "勞動基準法第七十九條第一項第一款".
    pub citation_title: String,

    /// Positional address of the chunk.
    pub hierarchy: H,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_no: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,

    /// Article number as printed in the source law.
    pub article_no: String,
}

/// A persisted chunk record: one addressable, independently retrievable
/// passage of an article.
///
/// Created once during segmentation and immutable thereafter;
/// downstream indexing and evaluation only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawChunk<H> {
    /// Unique (per article) chunk identifier, e.g. "LSA-79_P1_S2".
    pub chunk_id: String,

    /// ID of the originating article; the contract the evaluation
    /// pipeline depends on.
    pub parent_id: String,

    /// Final chunk text.
    pub text: String,

    pub metadata: ChunkMetadata<H>,
}

/// Chunk with fine-grained (paragraph + subparagraph) addressing.
pub type LawChunkFine = LawChunk<HierarchyFine>;

/// Chunk with coarse-grained (paragraph only) addressing.
pub type LawChunkCoarse = LawChunk<HierarchyCoarse>;

/// Intermediate segmentation result, before citation and ID assembly.
#[derive(Debug, Clone)]
pub struct ChunkDraft<H> {
    /// Final chunk text (preamble already prepended for expansions).
    pub text: String,

    /// Address of the span within the article.
    pub hierarchy: H,

    pub split_strategy: SplitStrategy,

    pub is_expanded: bool,
}

/// Passthrough article-level fields shared by all chunks of one article.
///
/// Borrowed from the [`RawLawArticle`] being segmented.
#[derive(Debug, Clone, Copy)]
pub struct ArticleContext<'a> {
    pub parent_id: &'a str,
    pub article_no: &'a str,
    pub url: &'a str,
    pub chapter_no: Option<u32>,
    pub chapter_title: Option<&'a str>,
}

impl<'a> ArticleContext<'a> {
    /// Build the context for one article.
    #[must_use]
    pub fn from_article(article: &'a RawLawArticle) -> Self {
        Self {
            parent_id: &article.id,
            article_no: &article.article_no,
            url: &article.url,
            chapter_no: article.chapter_no,
            chapter_title: article.chapter_name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&SplitStrategy::Atomic).unwrap(),
            "\"atomic\""
        );
        assert_eq!(
            serde_json::to_string(&SplitStrategy::NumericContextual).unwrap(),
            "\"numeric_contextual\""
        );
    }

    #[test]
    fn test_split_strategy_as_str() {
        assert_eq!(SplitStrategy::Numeric.as_str(), "numeric");
        assert_eq!(SplitStrategy::Contextual.as_str(), "contextual");
    }

    #[test]
    fn test_chunk_id_atomic() {
        let h = HierarchyFine {
            article: "5".to_string(),
            paragraph: None,
            subparagraph: None,
        };
        assert_eq!(h.chunk_id("LSA-5"), "LSA-5");
    }

    #[test]
    fn test_chunk_id_paragraph_only() {
        let h = HierarchyFine {
            article: "23".to_string(),
            paragraph: Some(2),
            subparagraph: None,
        };
        assert_eq!(h.chunk_id("LSA-23"), "LSA-23_P2");
    }

    #[test]
    fn test_chunk_id_subparagraph_only() {
        let h = HierarchyFine {
            article: "2".to_string(),
            paragraph: None,
            subparagraph: Some(1),
        };
        assert_eq!(h.chunk_id("LSA-2"), "LSA-2_S1");
    }

    #[test]
    fn test_chunk_id_nested() {
        let h = HierarchyFine {
            article: "79".to_string(),
            paragraph: Some(1),
            subparagraph: Some(3),
        };
        assert_eq!(h.chunk_id("LSA-79"), "LSA-79_P1_S3");
    }

    #[test]
    fn test_coarse_hierarchy_has_no_subparagraph() {
        let h = HierarchyCoarse {
            article: "79".to_string(),
            paragraph: Some(2),
        };
        assert_eq!(h.subparagraph(), None);
        assert_eq!(h.chunk_id("LSA-79"), "LSA-79_P2");

        // The serialized form carries no subparagraph key at all
        let json = serde_json::to_string(&h).unwrap();
        assert!(!json.contains("subparagraph"));
    }

    #[test]
    fn test_hierarchy_fine_serialization_skips_none() {
        let h = HierarchyFine {
            article: "5".to_string(),
            paragraph: None,
            subparagraph: None,
        };
        assert_eq!(serde_json::to_string(&h).unwrap(), "{\"article\":\"5\"}");
    }
}

//! Hierarchical chunking for statutory articles.
//!
//! Turns one article's raw text into an ordered set of chunks, each
//! tagged with a positional address (article/paragraph/sub-paragraph)
//! and a legal citation string:
//!
//! ```text
//! article content
//! ├── (1) numbered paragraph        → "..._P1"  第…項
//! │   ├── 一、 enumerated sub-item  → "..._P1_S1"  第…款
//! │   └── 二、 enumerated sub-item  → "..._P1_S2"
//! └── (2) numbered paragraph        → "..._P2"
//! ```

mod assembler;
mod citation;
mod engine;
mod markers;
mod numeral;
mod policy;
mod types;

pub use citation::citation_title;
pub use engine::ChunkEngine;
pub use markers::{find_enumerated_items, find_numbered_blocks, EnumeratedItem, NumberedBlock};
pub use numeral::chinese_numeral;
pub use policy::{CoarseGrained, FineGrained, GranularityPolicy};
pub use types::{
    ArticleContext, ChunkDraft, ChunkMetadata, HierarchyAddress, HierarchyCoarse, HierarchyFine,
    LawChunk, LawChunkCoarse, LawChunkFine, SplitStrategy,
};

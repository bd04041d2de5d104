//! Core data types for law data files.
//!
//! These types mirror the schema of the scraped law JSON files: one
//! `LawData` document per law, each holding a list of `RawLawArticle`
//! records cleaned of HTML markup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a law document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LawCategory {
    /// Mother law (母法), e.g. the Labor Standards Act itself.
    #[serde(rename = "母法")]
    MotherLaw,

    /// Subsidiary law (子法), e.g. enforcement rules.
    #[serde(rename = "子法")]
    SubsidiaryLaw,

    /// Administrative interpretation (函釋).
    #[serde(rename = "函釋")]
    Interpretation,

    /// Court precedent (判例).
    #[serde(rename = "判例")]
    Case,
}

impl LawCategory {
    /// Get the Chinese label used in the data files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MotherLaw => "母法",
            Self::SubsidiaryLaw => "子法",
            Self::Interpretation => "函釋",
            Self::Case => "判例",
        }
    }
}

/// A single statutory article as produced by the scraper.
///
/// This is the immutable input record of the chunking pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLawArticle {
    /// Stable article key, e.g. "LSA-24" for Labor Standards Act article 24.
    pub id: String,

    /// Chapter number, e.g. 2 for "第二章 勞動契約". None when the law
    /// has no chapters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_no: Option<u32>,

    /// Chapter name, e.g. "勞動契約".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_name: Option<String>,

    /// Article number as printed: digits, or `digits-digits` for
    /// amendment articles (e.g. "9-1" for 第 9-1 條).
    pub article_no: String,

    /// Generated one-line summary for query purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Article content, cleaned of HTML tags and extra whitespace.
    /// May contain embedded newline-delimited numbering markers.
    pub content: String,

    /// National Law Database URL of the article, for citation.
    pub url: String,

    /// Related concept keywords (reserved for future use).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_concepts: Vec<String>,
}

/// A complete law file: metadata plus its articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawData {
    /// Category of the law.
    pub category: LawCategory,

    /// Title of the law, e.g. "勞動基準法".
    pub title: String,

    /// Last modification date of the law.
    pub last_modified_date: NaiveDate,

    /// Articles of the law, in source order.
    pub articles: Vec<RawLawArticle>,
}

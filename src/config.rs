//! Configuration constants for the chunker.

/// Law title used as the prefix of every citation string.
///
/// The corpus is the Labor Standards Act (勞動基準法) and its subsidiary
/// regulations; citations are always rendered against the mother law.
pub const LAW_TITLE: &str = "勞動基準法";

/// Upper bound (inclusive) of the Chinese numeral formatter's domain.
///
/// Article, paragraph and sub-paragraph numbers in this corpus never
/// reach four digits.
pub const MAX_NUMERAL: u64 = 999;

/// Default output file name for a granularity label.
///
/// Follows the tiered index naming of the ingestion pipeline:
/// `tier_1_fine.json` / `tier_1_coarse.json`.
#[must_use]
pub fn default_output_name(granularity: &str) -> String {
    format!("tier_1_{granularity}.json")
}

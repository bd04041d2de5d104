//! Legal citation formatting.
//!
//! Composes the human-readable citation for a chunk address, e.g.
//! "勞動基準法第七十九條第一項第一款". Parts are strictly additive in the
//! order article → paragraph → sub-paragraph; no suffix is rendered for
//! an absent field.

use super::numeral::chinese_numeral;
use super::types::HierarchyAddress;
use crate::config::LAW_TITLE;
use crate::error::Result;

/// Format the citation title for a chunk address.
///
/// Article handling:
/// - hyphenated amendment numbers ("84-2") render as "第八十四條之二"
/// - purely numeric numbers are converted ("23" → "第二十三條")
/// - anything else is rendered verbatim as a defensive fallback
///
/// # Errors
/// Propagates [`crate::error::ChunkerError::NumeralOutOfRange`] when a
/// numeric component exceeds the formatter's domain.
pub fn citation_title<H: HierarchyAddress>(hierarchy: &H) -> Result<String> {
    let mut title = format!("{LAW_TITLE}{}", article_part(hierarchy.article())?);

    if let Some(paragraph) = hierarchy.paragraph() {
        title.push_str(&format!("第{}項", chinese_numeral(u64::from(paragraph))?));
    }

    if let Some(subparagraph) = hierarchy.subparagraph() {
        title.push_str(&format!("第{}款", chinese_numeral(u64::from(subparagraph))?));
    }

    Ok(title)
}

/// Render the article portion of a citation.
fn article_part(article_no: &str) -> Result<String> {
    if let Some((main, sub)) = parse_amendment_number(article_no) {
        return Ok(format!(
            "第{}條之{}",
            chinese_numeral(main)?,
            chinese_numeral(sub)?
        ));
    }

    match article_no.parse::<u64>() {
        Ok(n) => Ok(format!("第{}條", chinese_numeral(n)?)),
        // Non-numeric article number: render verbatim rather than fail
        Err(_) => Ok(format!("第{article_no}條")),
    }
}

/// Parse a hyphenated amendment article number like "84-2".
///
/// Returns `None` unless both sides of a single hyphen are numeric.
fn parse_amendment_number(article_no: &str) -> Option<(u64, u64)> {
    let (main, sub) = article_no.split_once('-')?;
    Some((main.parse().ok()?, sub.parse().ok()?))
}

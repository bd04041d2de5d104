//! Marker detection for statutory article text.
//!
//! Two scan passes over raw article content:
//!
//! - numbered paragraphs: `(1)`, `(2)`, ... at the start of a line
//! - enumerated sub-items: `一、`, `二、`, ... at the start of a line
//!
//! Each pass slices the text at marker positions; a span runs from its
//! marker to the start of the next marker (or end of text). Regions that
//! match no marker fold into the enclosing span, so malformed numbering
//! never aborts processing.

use std::sync::LazyLock;

use regex::Regex;

/// Numbered paragraph marker: "(1)", "(2)", ... after start-of-text or
/// a newline, optionally indented.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)\s*\((\d+)\)").expect("valid regex"));

/// Enumerated sub-item marker: Chinese numeral followed by "、".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)\s*([一二三四五六七八九十百]+)、").expect("valid regex"));

/// One numbered paragraph block, e.g. "(2)雇主應置備...".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedBlock {
    /// Declared paragraph number, parsed from the digits inside the
    /// parentheses (not the encounter ordinal).
    pub number: u32,

    /// Block text including its "(n)" marker, whitespace-trimmed.
    pub text: String,
}

/// One enumerated sub-item, e.g. "一、勞工：指...".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedItem {
    /// Ordinal by encounter order (1-based), deliberately not parsed
    /// from the Chinese numeral at the marker.
    pub ordinal: u32,

    /// Item text including its "一、" marker, whitespace-trimmed.
    pub text: String,
}

/// Scan for numbered paragraph blocks.
///
/// Returns an empty vector when the text contains no `(n)` markers.
/// When the digits overflow, the encounter ordinal is used instead and
/// a warning is logged; dropping the block would lose text.
#[must_use]
pub fn find_numbered_blocks(text: &str) -> Vec<NumberedBlock> {
    let matches: Vec<_> = PARAGRAPH_MARKER.captures_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            #[allow(clippy::expect_used)] // Group 0 always exists
            let m = caps.get(0).expect("match");
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |next| next.start());

            let number = caps[1].parse::<u32>().unwrap_or_else(|_| {
                let ordinal = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
                tracing::warn!(
                    digits = &caps[1],
                    ordinal,
                    "Paragraph marker digits overflow, falling back to encounter ordinal"
                );
                ordinal
            });

            NumberedBlock {
                number,
                text: text[m.start()..end].trim().to_string(),
            }
        })
        .collect()
}

/// Scan for enumerated sub-items.
///
/// Returns `None` when the text contains no `一、`-style markers.
/// Otherwise returns the preamble (trimmed text strictly before the
/// first marker; shared context such as "本法用詞，定義如下：") and the
/// items in encounter order.
#[must_use]
pub fn find_enumerated_items(text: &str) -> Option<(String, Vec<EnumeratedItem>)> {
    let matches: Vec<_> = SUBITEM_MARKER.find_iter(text).collect();
    let first = matches.first()?;

    let preamble = text[..first.start()].trim().to_string();

    let items = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            EnumeratedItem {
                ordinal: u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1),
                text: text[m.start()..end].trim().to_string(),
            }
        })
        .collect();

    Some((preamble, items))
}

//! Chinese legal numeral formatting.
//!
//! Converts small integers to the numeral style used in Taiwanese legal
//! citations: 23 → "二十三", 84 → "八十四". The 10-19 range uses the
//! contracted form ("十一", never "一十一").

use crate::config::MAX_NUMERAL;
use crate::error::{ChunkerError, Result};

/// Digit characters indexed 0-9.
const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Format a number (0-999) as a Chinese legal numeral.
///
/// # Errors
/// Returns [`ChunkerError::NumeralOutOfRange`] for input above 999.
/// A wrong numeral would be a legal-accuracy bug, so the formatter
/// refuses out-of-range input instead of truncating.
///
/// # Examples
/// ```
/// use twlabor_chunker::chunking::chinese_numeral;
///
/// assert_eq!(chinese_numeral(5).unwrap(), "五");
/// assert_eq!(chinese_numeral(23).unwrap(), "二十三");
/// assert_eq!(chinese_numeral(84).unwrap(), "八十四");
/// ```
pub fn chinese_numeral(n: u64) -> Result<String> {
    if n > MAX_NUMERAL {
        return Err(ChunkerError::NumeralOutOfRange(n));
    }

    if n == 0 {
        return Ok(DIGITS[0].to_string());
    }

    // Contracted teens: the tens digit is never rendered as "一十"
    if (10..20).contains(&n) {
        let mut s = String::from("十");
        let units = (n % 10) as usize;
        if units > 0 {
            s.push(DIGITS[units]);
        }
        return Ok(s);
    }

    let hundreds = (n / 100) as usize;
    let tens = ((n % 100) / 10) as usize;
    let units = (n % 10) as usize;

    let mut s = String::new();

    if hundreds > 0 {
        s.push(DIGITS[hundreds]);
        s.push('百');
    }

    if tens > 0 {
        s.push(DIGITS[tens]);
        s.push('十');
    } else if hundreds > 0 && units > 0 {
        // Interior zero: 101 → "一百零一"
        s.push(DIGITS[0]);
    }

    if units > 0 {
        s.push(DIGITS[units]);
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        assert_eq!(chinese_numeral(0).unwrap(), "零");
        assert_eq!(chinese_numeral(1).unwrap(), "一");
        assert_eq!(chinese_numeral(5).unwrap(), "五");
        assert_eq!(chinese_numeral(9).unwrap(), "九");
    }

    #[test]
    fn test_teens_contraction() {
        assert_eq!(chinese_numeral(10).unwrap(), "十");
        assert_eq!(chinese_numeral(11).unwrap(), "十一");
        assert_eq!(chinese_numeral(15).unwrap(), "十五");
        assert_eq!(chinese_numeral(19).unwrap(), "十九");
    }

    #[test]
    fn test_tens() {
        assert_eq!(chinese_numeral(20).unwrap(), "二十");
        assert_eq!(chinese_numeral(23).unwrap(), "二十三");
        assert_eq!(chinese_numeral(79).unwrap(), "七十九");
        assert_eq!(chinese_numeral(84).unwrap(), "八十四");
        assert_eq!(chinese_numeral(99).unwrap(), "九十九");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(chinese_numeral(100).unwrap(), "一百");
        assert_eq!(chinese_numeral(101).unwrap(), "一百零一");
        assert_eq!(chinese_numeral(110).unwrap(), "一百一十");
        assert_eq!(chinese_numeral(111).unwrap(), "一百一十一");
        assert_eq!(chinese_numeral(205).unwrap(), "二百零五");
        assert_eq!(chinese_numeral(999).unwrap(), "九百九十九");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            chinese_numeral(1000),
            Err(ChunkerError::NumeralOutOfRange(1000))
        ));
        assert!(chinese_numeral(u64::MAX).is_err());
    }
}

//! Lenient rate parsing.
//!
//! Scraped rate cells often carry trailing noise ("48.35 EGP", "15.70*") or no
//! number at all ("N/A", "-"). `parse_rate` takes the longest decimal prefix
//! and falls back to `0.0` instead of failing.

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("Invalid decimal prefix pattern")
});

/// Parse the leading decimal number of `text`, or `0.0` when there is none.
///
/// Only ASCII digits are read and `.` is the only decimal separator, so
/// `"1,234.5"` yields `1.0`. Values overflowing `f64` yield `0.0`.
pub fn parse_rate(text: &str) -> f64 {
    DECIMAL_PREFIX
        .find(text)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
        .filter(|rate| rate.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_rate("1.05"), 1.05);
        assert_eq!(parse_rate("151"), 151.0);
        assert_eq!(parse_rate("  48.35"), 48.35);
        assert_eq!(parse_rate("-0.5"), -0.5);
        assert_eq!(parse_rate(".75"), 0.75);
        assert_eq!(parse_rate("1e2"), 100.0);
    }

    #[test]
    fn keeps_leading_number_and_drops_the_rest() {
        assert_eq!(parse_rate("48.35 EGP"), 48.35);
        assert_eq!(parse_rate("15.70*"), 15.7);
        assert_eq!(parse_rate("1,234.5"), 1.0);
        assert_eq!(parse_rate("5."), 5.0);
        assert_eq!(parse_rate("2e"), 2.0);
        assert_eq!(parse_rate("48.35\u{0664}"), 48.35);
        assert_eq!(parse_rate("12\u{0663}"), 12.0);
    }

    #[test]
    fn malformed_text_is_zero() {
        assert_eq!(parse_rate("N/A"), 0.0);
        assert_eq!(parse_rate(""), 0.0);
        assert_eq!(parse_rate("-"), 0.0);
        assert_eq!(parse_rate("EGP 48.35"), 0.0);
        assert_eq!(parse_rate("\u{0664}\u{0668}.35"), 0.0);
    }

    #[test]
    fn overflowing_exponent_is_zero() {
        assert_eq!(parse_rate("1e999"), 0.0);
        assert_eq!(parse_rate("-1e999"), 0.0);
    }
}

//! Recognition of numeric literals typed by the user or held by the display.

use super::format::{INFINITY_TEXT, NEG_INFINITY_TEXT};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A plain decimal literal with optional sign, fraction and exponent.
    /// Rejects the `inf`/`nan` spellings that `f64::from_str` would accept.
    /// ASCII digits only; `\d` would admit every Unicode digit.
    static ref NUMERIC_LITERAL: Regex = Regex::new(
        r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// ASCII digits with at most one decimal point, as typed on a keypad.
    static ref KEYPAD_NUMBER: Regex = Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

/// Check if the input is a plain numeric literal.
pub fn is_numeric_literal(input: &str) -> bool {
    NUMERIC_LITERAL.is_match(input.trim())
}

/// Check if a token is a run of keypad keystrokes (digits and one point).
pub fn is_keypad_number(token: &str) -> bool {
    token.len() > 1 && KEYPAD_NUMBER.is_match(token)
}

/// Parse user input as a number.
///
/// Accepts a comma as the decimal separator when no point is present.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    if !is_numeric_literal(&normalized) {
        return None;
    }
    normalized.parse().ok()
}

/// Parse user input as an integer.
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Parse the text currently shown on the display.
///
/// Returns `None` for the error state.
pub fn parse_display(display: &str) -> Option<f64> {
    match display {
        INFINITY_TEXT => Some(f64::INFINITY),
        NEG_INFINITY_TEXT => Some(f64::NEG_INFINITY),
        other => parse_number(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_literals() {
        assert!(is_numeric_literal("42"));
        assert!(is_numeric_literal("-3.5"));
        assert!(is_numeric_literal("+.5"));
        assert!(is_numeric_literal("7."));
        assert!(is_numeric_literal("1e-3"));
        assert!(is_numeric_literal("  12  "));
    }

    #[test]
    fn test_non_literals_rejected() {
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal("."));
        assert!(!is_numeric_literal("inf"));
        assert!(!is_numeric_literal("NaN"));
        assert!(!is_numeric_literal("1,5,6"));
        assert!(!is_numeric_literal("2+2"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3.25"), Some(3.25));
        assert_eq!(parse_number("3,25"), Some(3.25));
        assert_eq!(parse_number(" -7 "), Some(-7.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("5"), Some(5));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("2.5"), None);
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("0."), Some(0.0));
        assert_eq!(parse_display("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_display("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_display("Error"), None);
    }

    #[test]
    fn test_keypad_numbers() {
        assert!(is_keypad_number("42"));
        assert!(is_keypad_number("3.14"));
        assert!(!is_keypad_number("7"));
        assert!(!is_keypad_number("1.2.3"));
        assert!(!is_keypad_number("-5"));
        assert!(!is_keypad_number("\u{FF11}\u{FF12}"));
    }

    #[test]
    fn test_unicode_digits_rejected() {
        assert!(!is_numeric_literal("\u{0661}\u{0662}"));
        assert_eq!(parse_number("\u{FF15}"), None);
    }
}

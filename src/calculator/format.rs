//! Fixed-width formatting of numeric results.
//!
//! The display holds at most [`MAX_DISPLAY_LENGTH`] characters. Values whose
//! shortest representation is longer are first cut down to fewer fractional
//! digits and otherwise rendered in scientific notation.

/// Width budget of the calculator display.
pub const MAX_DISPLAY_LENGTH: usize = 12;

/// Display text for a NaN result.
pub const ERROR_TEXT: &str = "Error";
pub const INFINITY_TEXT: &str = "Infinity";
pub const NEG_INFINITY_TEXT: &str = "-Infinity";

/// Format a value for the display.
pub fn format_display(value: f64) -> String {
    if value.is_nan() {
        return ERROR_TEXT.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY_TEXT
        } else {
            NEG_INFINITY_TEXT
        };
        return text.to_string();
    }
    if value == 0.0 {
        // Normalizes -0.
        return "0".to_string();
    }

    let shortest = format!("{}", value);
    if shortest.len() <= MAX_DISPLAY_LENGTH {
        return shortest;
    }

    if let Some(fixed) = format_fixed(value, &shortest) {
        return fixed;
    }

    format_scientific(value)
}

/// Shorten the fractional part so the value fits the display.
///
/// Returns `None` when the integer part alone is too wide, or when the
/// rounding would erase every significant digit.
fn format_fixed(value: f64, shortest: &str) -> Option<String> {
    let (int_part, dec_part) = shortest.split_once('.')?;
    let available = MAX_DISPLAY_LENGTH.checked_sub(int_part.len() + 1)?;
    if available == 0 {
        return None;
    }

    let precision = available.min(dec_part.len());
    let formatted = format!("{:.*}", precision, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    let significant = trimmed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if trimmed.len() > MAX_DISPLAY_LENGTH || !significant {
        return None;
    }
    Some(trimmed.to_string())
}

/// Scientific notation with as many fractional digits (at most 5) as fit.
fn format_scientific(value: f64) -> String {
    let shortest = format!("{:e}", value);
    if shortest.len() <= MAX_DISPLAY_LENGTH {
        return shortest;
    }

    for precision in (0..=5).rev() {
        let formatted = format!("{:.*e}", precision, value);
        if formatted.len() <= MAX_DISPLAY_LENGTH {
            return formatted;
        }
    }
    format!("{:.0e}", value)
}

/// Format a value without the width budget, for result lines and history.
pub fn format_number(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return format_display(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= 1e16 || value.abs() < 1e-7 {
        return format!("{:e}", value);
    }
    format!("{}", value)
}

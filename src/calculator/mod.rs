//! Calculator operation library.
//!
//! This module provides:
//! - Pure arithmetic and scientific operations with typed failures
//! - Fixed-width formatting of results for the display
//! - Recognition of numeric input
//! - Copying results to the clipboard

mod clipboard;
mod error;
mod format;
mod input;
pub mod operations;

pub use clipboard::copy_result;
pub use error::{CalcError, DomainError};
pub use format::{
    ERROR_TEXT, INFINITY_TEXT, MAX_DISPLAY_LENGTH, NEG_INFINITY_TEXT, format_display,
    format_number,
};
pub use input::{is_keypad_number, is_numeric_literal, parse_display, parse_integer, parse_number};
pub use operations::CalcResult;

//! Copying results to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy a display value to the system clipboard.
///
/// Separators are not part of the display, so the text is copied as shown.
pub fn copy_result(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("Failed to copy result to clipboard")?;

    tracing::debug!(text, "copied result to clipboard");
    Ok(())
}

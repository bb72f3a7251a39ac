//! Render model of a session.

use std::fmt;

/// Everything the surface redraws after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub display: String,
    /// Newest history records, oldest first.
    pub history: Vec<String>,
    /// Memory indicator, angle mode and pending operation.
    pub caption: String,
    /// Message surfaced by a failed action.
    pub message: Option<String>,
}

const WIDTH: usize = 28;

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "─".repeat(WIDTH);

        writeln!(f, "┌{rule}┐")?;
        if self.history.is_empty() {
            writeln!(f, "│{:<width$}│", " History will appear here", width = WIDTH)?;
        }
        for record in &self.history {
            writeln!(f, "│ {:<width$}│", clip(record, WIDTH - 1), width = WIDTH - 1)?;
        }
        writeln!(f, "├{rule}┤")?;
        writeln!(f, "│{:>width$} │", self.display, width = WIDTH - 1)?;
        writeln!(f, "└{rule}┘")?;
        write!(f, " {}", self.caption)?;
        if let Some(message) = &self.message {
            write!(f, "\n Error: {message}")?;
        }
        Ok(())
    }
}

/// Cut a record to `width` characters, marking the cut.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

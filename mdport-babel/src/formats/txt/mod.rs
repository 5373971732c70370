//! Plain text format implementation
//!
//! Plain text carries no styling, so emphasis markers are removed and the inner text kept.
//! Heading prefixes are already gone after line classification. Lines are joined with `\n`
//! and the document is trimmed as a whole, so leading and trailing blank lines disappear
//! while blank lines between paragraphs survive.

use crate::common::emphasis::strip_emphasis;
use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::{Line, LineKind};

/// Format implementation for plain text
pub struct TxtFormat;

impl TxtFormat {
    /// Render lines to a plain string.
    pub fn render_text(&self, lines: &[Line]) -> String {
        let joined = lines
            .iter()
            .map(|line| match line.kind {
                LineKind::Paragraph => strip_emphasis(&line.text),
                LineKind::Heading1 | LineKind::Heading2 | LineKind::Empty => line.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n");
        joined.trim().to_string()
    }
}

impl Format for TxtFormat {
    fn name(&self) -> &str {
        "txt"
    }

    fn description(&self) -> &str {
        "Plain text with Markdown markers removed"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn render(&self, lines: &[Line]) -> Result<SerializedDocument, FormatError> {
        Ok(SerializedDocument::Text(self.render_text(lines)))
    }
}

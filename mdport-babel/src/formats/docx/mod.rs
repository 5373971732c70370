//! DOCX format implementation
//!
//! # Element Mapping Table
//!
//! | Line kind  | DOCX paragraph                          |
//! |------------|-----------------------------------------|
//! | Empty      | `<w:p>` without runs                    |
//! | Heading1   | `pStyle=Heading1`, one plain run        |
//! | Heading2   | `pStyle=Heading2`, one plain run        |
//! | Paragraph  | one run per segment, `<w:b/>` / `<w:i/>`|
//!
//! The document is first built as a [`document::Document`], then packaged into an OOXML zip
//! by [`package::package`]. A failure while packaging fails the whole export; no partial
//! archive is returned.

pub mod document;
pub mod package;

pub use document::{Document, Paragraph, ParagraphStyle, Run};

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::Line;
use tracing::debug;

/// Format implementation for Word documents
pub struct DocxFormat;

impl DocxFormat {
    /// Build the structured document without packaging it.
    pub fn build(&self, lines: &[Line]) -> Document {
        Document::from_lines(lines)
    }
}

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Office Open XML word-processing document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn render(&self, lines: &[Line]) -> Result<SerializedDocument, FormatError> {
        let document = self.build(lines);
        let bytes = package::package(&document)?;
        debug!(
            paragraphs = document.paragraphs.len(),
            bytes = bytes.len(),
            "packaged docx"
        );
        Ok(SerializedDocument::Binary(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::lines::parse_lines;

    #[test]
    fn test_build_end_to_end_sample() {
        let doc = DocxFormat.build(&parse_lines("# Title\n\nThis is **bold** and *italic*."));
        assert_eq!(doc.paragraphs.len(), 3);
        assert_eq!(doc.paragraphs[0].style, Some(ParagraphStyle::Heading1));
        assert_eq!(doc.paragraphs[0].text(), "Title");
        assert!(doc.paragraphs[1].is_empty());
        assert_eq!(doc.paragraphs[2].runs.len(), 5);
    }

    #[test]
    fn test_render_is_zip() {
        let bytes = DocxFormat
            .render(&parse_lines("Body"))
            .unwrap()
            .into_bytes();
        assert!(bytes.starts_with(b"PK"));
    }
}

//! PDF format implementation
//!
//! Rendering happens in two stages:
//!
//! 1. [`layout::compose`] flows the lines onto pages: headings in bold at a larger size,
//!    paragraphs word-wrapped with per-segment fonts, a page break whenever the cursor has
//!    passed the bottom margin before a new logical line.
//! 2. [`writer::write_pdf`] serializes the composed pages with `pdf-writer`.
//!
//! Keeping the layout as plain data means page breaking and wrapping can be tested without
//! parsing PDF output.
//!
//! # Options
//!
//! | Key         | Values            | Default |
//! |-------------|-------------------|---------|
//! | `page-size` | `a4`, `letter`    | `a4`    |

pub mod layout;
pub mod metrics;
pub mod writer;

pub use layout::{FontStyle, PageGeometry, PageSize, PagedLayout};

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::Line;
use std::collections::HashMap;
use tracing::debug;

/// Format implementation producing paged PDF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfFormat {
    page_size: PageSize,
}

impl PdfFormat {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Compose lines onto pages without serializing them.
    pub fn layout(&self, lines: &[Line]) -> PagedLayout {
        layout::compose(lines, PageGeometry::new(self.page_size))
    }

    fn render_pdf(&self, lines: &[Line]) -> SerializedDocument {
        let layout = self.layout(lines);
        let bytes = writer::write_pdf(&layout);
        debug!(
            pages = layout.page_count(),
            bytes = bytes.len(),
            page_size = self.page_size.name(),
            "rendered pdf"
        );
        SerializedDocument::Binary(bytes)
    }
}

impl Format for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "Paged PDF document using the Helvetica base fonts"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn render(&self, lines: &[Line]) -> Result<SerializedDocument, FormatError> {
        Ok(self.render_pdf(lines))
    }

    fn render_with_options(
        &self,
        lines: &[Line],
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        let format = PdfFormat::from_options(options, self.page_size)?;
        Ok(format.render_pdf(lines))
    }
}

impl PdfFormat {
    fn from_options(
        options: &HashMap<String, String>,
        default: PageSize,
    ) -> Result<Self, FormatError> {
        if let Some(unknown) = options.keys().find(|key| key.as_str() != "page-size") {
            return Err(FormatError::InvalidOption(format!(
                "Unknown pdf option '{unknown}'"
            )));
        }

        let page_size = match options.get("page-size") {
            Some(value) => PageSize::from_name(value).ok_or_else(|| {
                FormatError::InvalidOption(format!(
                    "Invalid page size '{value}' for --extra-page-size (expected a4 or letter)"
                ))
            })?,
            None => default,
        };
        Ok(PdfFormat::new(page_size))
    }
}

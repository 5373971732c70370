//! Format trait definition
//!
//! This module defines the core Format trait that every output format implements.
//! The trait provides a uniform interface for rendering parsed lines into an artifact.

use crate::error::FormatError;
use crate::ir::nodes::Line;
use std::collections::HashMap;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., txt)
    Text(String),
    /// Binary output (e.g., PDF, DOCX)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        match self {
            SerializedDocument::Text(text) => text.len(),
            SerializedDocument::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, SerializedDocument::Binary(_))
    }
}

/// Trait for output formats
///
/// Implementors turn the classified lines of a Markdown document into one artifact.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn render(&self, lines: &[Line]) -> Result<SerializedDocument, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "txt", "pdf", "docx")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// The first entry is used when naming artifacts.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Extension used for artifact file names, falling back to the format name.
    fn default_extension(&self) -> &str {
        self.file_extensions()
            .first()
            .copied()
            .unwrap_or_else(|| self.name())
    }

    /// Render classified lines into an artifact
    fn render(&self, lines: &[Line]) -> Result<SerializedDocument, FormatError>;

    /// Render, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which delegates to
    /// [`Format::render`] and rejects any parameter it is given.
    fn render_with_options(
        &self,
        lines: &[Line],
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        if options.is_empty() {
            self.render(lines)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

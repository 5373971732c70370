//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats are registered under their lowercase name and looked up case-insensitively.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::Line;
use std::collections::HashMap;
use tracing::warn;

/// Format used when a requested name is not registered.
pub const FALLBACK_FORMAT: &str = "txt";

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let format = registry.select("PDF")?;
/// let artifact = format.render(&lines)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_ascii_lowercase(), Box::new(format));
    }

    /// Get a format by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(&name.to_ascii_lowercase())
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Select the format for a requested name, falling back to plain text.
    ///
    /// An unrecognized name is not an error: a warning is logged and the
    /// [`FALLBACK_FORMAT`] is returned instead. This only fails if the registry has no
    /// fallback format registered either.
    pub fn select(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match self.get(name) {
            Ok(format) => Ok(format),
            Err(_) => {
                warn!(
                    requested = name,
                    fallback = FALLBACK_FORMAT,
                    "unrecognized format '{name}', falling back to {FALLBACK_FORMAT}"
                );
                self.get(FALLBACK_FORMAT)
            }
        }
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(&name.to_ascii_lowercase())
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over the registered formats, sorted by name
    pub fn formats(&self) -> Vec<&dyn Format> {
        let mut formats: Vec<_> = self.formats.values().map(|f| f.as_ref()).collect();
        formats.sort_by(|a, b| a.name().cmp(b.name()));
        formats
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    /// Extensions are compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("out.pdf"), Some("pdf".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("out.rtf"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
    }

    /// Render lines using the format selected for `format` (with fallback)
    pub fn render(&self, lines: &[Line], format: &str) -> Result<SerializedDocument, FormatError> {
        self.render_with_options(lines, format, &HashMap::new())
    }

    /// Render lines using the selected format and options
    pub fn render_with_options(
        &self,
        lines: &[Line],
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        self.select(format)?.render_with_options(lines, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::txt::TxtFormat);
        registry.register(crate::formats::pdf::PdfFormat::default());
        registry.register(crate::formats::docx::DocxFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

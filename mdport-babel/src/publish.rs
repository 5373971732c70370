//! Export pipeline.
//!
//! Provides a high-level API for turning Markdown source into a named artifact.
//! This module bridges the format registry and file I/O: it parses the source, selects the
//! format (falling back to plain text for unknown names), renders, and either hands the
//! artifact back or writes it to disk.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::common::lines::parse_lines;
use crate::error::FormatError;
use crate::format::SerializedDocument;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Artifact file stem used when none is configured.
pub const DEFAULT_STEM: &str = "document";

/// Specifies one export.
///
/// Use the builder pattern to configure it:
///
/// ```ignore
/// let request = ExportRequest::new("# Title", "pdf")
///     .with_output_path("out.pdf")
///     .with_option("page-size", "letter");
/// ```
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    /// Markdown source.
    pub content: &'a str,
    /// Requested format name, matched case-insensitively.
    pub format: &'a str,
    /// File stem for the suggested artifact name.
    pub stem: String,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., page size).
    pub options: HashMap<String, String>,
}

impl<'a> ExportRequest<'a> {
    pub fn new(content: &'a str, format: &'a str) -> Self {
        Self {
            content,
            format,
            stem: DEFAULT_STEM.to_string(),
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the stem used for the artifact's suggested file name.
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds several format-specific options.
    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// A rendered document plus its suggested file name.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Name of the format that produced the artifact (after fallback).
    pub format: String,
    /// Suggested file name, e.g. `document.pdf`.
    pub filename: String,
    pub document: SerializedDocument,
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Artifact held in memory (no output path requested).
    InMemory(Artifact),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Render a request with the default registry, keeping the artifact in memory.
///
/// The output path of the request is ignored; see [`publish`].
pub fn export(request: &ExportRequest<'_>) -> Result<Artifact, FormatError> {
    export_with(&FormatRegistry::with_defaults(), request)
}

/// Render a request with a specific registry.
pub fn export_with(
    registry: &FormatRegistry,
    request: &ExportRequest<'_>,
) -> Result<Artifact, FormatError> {
    let lines = parse_lines(request.content);
    let format = registry.select(request.format)?;
    let document = format.render_with_options(&lines, &request.options)?;

    debug!(
        format = format.name(),
        lines = lines.len(),
        bytes = document.len(),
        "exported document"
    );

    Ok(Artifact {
        format: format.name().to_string(),
        filename: format!("{}.{}", request.stem, format.default_extension()),
        document,
    })
}

/// Exports a document according to the request.
///
/// Without an output path the artifact is returned in memory, text or binary alike, and
/// delivering it is up to the caller.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - Rendering or packaging fails
/// - A format option is invalid
/// - Writing the output file fails
pub fn publish(request: ExportRequest<'_>) -> Result<PublishResult, FormatError> {
    let artifact = export(&request)?;
    match request.output {
        Some(path) => write_to_path(path, artifact.document.into_bytes()).map(|path| {
            PublishResult {
                artifact: PublishArtifact::File(path),
            }
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(artifact),
        }),
    }
}

fn write_to_path(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, FormatError> {
    fs::write(&path, &bytes)
        .map(|_| path.clone())
        .map_err(|err| {
            FormatError::SerializationError(format!("writing '{}': {err}", path.display()))
        })
}

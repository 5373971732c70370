//! Markdown export for plain text, PDF and DOCX documents
//!
//!     This crate turns a small subset of Markdown (two heading levels, bold and italic
//!     emphasis) into one of three output artifacts. It is a pure lib: the mdport cli is the
//!     shell around it, and no code here should assume a shell environment (stdout, env vars,
//!     current directory).
//!
//! Architecture
//!
//!     Parsing is shared, rendering is per format. Every export goes through the same two
//!     steps:
//!
//!     raw text → common::lines (typed lines) → Format::render (artifact)
//!
//!     Paragraph lines are further split into styled segments by common::emphasis. Only the
//!     formats that actually style text (pdf, docx) ask for segments; the txt format just
//!     strips the markers.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Export requests and named artifacts
//!     ├── ir                      # Line and Segment types
//!     ├── common                  # Line classification and emphasis scanning
//!     └── formats
//!         ├── txt
//!         ├── pdf                 # layout.rs (page composition), metrics.rs, writer.rs
//!         └── docx                # document.rs (paragraph model), package.rs (OOXML zip)
//!
//! Testing
//!     tests
//!     └── <format>/mod.rs
//!
//!     Element level behaviour (line classification, emphasis tie-breaks) is unit tested next
//!     to the code. The integration tests drive full exports through the registry.
//!
//! Format Selection
//!
//!     Format names are matched case-insensitively. An unknown name is not an error: the
//!     registry logs a warning and hands back the txt format, so an export always produces
//!     something readable.
//!
//! Library Choices
//!
//!     - pdf-writer for the PDF object graph; we only use the base-14 Helvetica family, so
//!       no font embedding is needed and text measuring uses the standard AFM widths.
//!     - zip + quick-xml for the DOCX package, the same pair used for other zip based
//!       document containers (EPUB).
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::{Format, SerializedDocument};
pub use ir::nodes::{Emphasis, Line, LineKind, Segment};
pub use publish::{export, publish, Artifact, ExportRequest, PublishArtifact, PublishResult};
pub use registry::FormatRegistry;

/// Parses Markdown source into typed lines.
///
/// Shorthand for [`common::lines::parse_lines`].
pub fn parse(source: &str) -> Vec<Line> {
    common::lines::parse_lines(source)
}

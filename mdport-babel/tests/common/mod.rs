//! Shared fixtures for the integration tests.

/// The reference document used across formats.
pub const SAMPLE: &str = "# Title\n\nThis is **bold** and *italic*.";

/// A body-only document long enough to span several pages.
pub fn long_document(lines: usize) -> String {
    (1..=lines)
        .map(|n| format!("Line number {n} of the long document."))
        .collect::<Vec<_>>()
        .join("\n")
}

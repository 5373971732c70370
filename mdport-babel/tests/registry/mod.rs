//! Format selection tests

use crate::common::SAMPLE;
use mdport_babel::registry::FALLBACK_FORMAT;
use mdport_babel::{export, ExportRequest, FormatRegistry, SerializedDocument};

#[test]
fn test_default_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(registry.list_formats(), vec!["docx", "pdf", "txt"]);
}

#[test]
fn test_unknown_format_renders_plain_text() {
    let artifact = export(&ExportRequest::new(SAMPLE, "rtf")).unwrap();
    assert_eq!(artifact.format, FALLBACK_FORMAT);
    assert_eq!(
        artifact.document,
        SerializedDocument::Text("Title\n\nThis is bold and italic.".to_string())
    );
}

#[test]
fn test_detect_from_output_name() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("out/Report.PDF"),
        Some("pdf".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("notes.text"),
        Some("txt".to_string())
    );
    assert_eq!(registry.detect_format_from_filename("archive.tar"), None);
}

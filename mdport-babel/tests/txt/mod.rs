//! Plain-text export tests

use crate::common::SAMPLE;
use insta::assert_snapshot;
use mdport_babel::format::Format;
use mdport_babel::formats::TxtFormat;
use mdport_babel::{export, parse, ExportRequest, SerializedDocument};

fn to_text(source: &str) -> String {
    match TxtFormat.render(&parse(source)).unwrap() {
        SerializedDocument::Text(text) => text,
        SerializedDocument::Binary(_) => panic!("Expected text output"),
    }
}

#[test]
fn test_sample_document() {
    assert_snapshot!(to_text(SAMPLE), @r"
    Title

    This is bold and italic.
    ");
}

#[test]
fn test_mixed_document() {
    let source = "\
# Report
## Summary
Numbers went **up**.

* not a list, just a star
Closing *remarks* here.
";
    assert_snapshot!(to_text(source), @r"
    Report
    Summary
    Numbers went up.

    * not a list, just a star
    Closing remarks here.
    ");
}

#[test]
fn test_export_names_artifact() {
    let artifact = export(&ExportRequest::new(SAMPLE, "TXT").with_stem("notes")).unwrap();
    assert_eq!(artifact.format, "txt");
    assert_eq!(artifact.filename, "notes.txt");
}

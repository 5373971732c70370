//! DOCX export tests

use crate::common::SAMPLE;
use mdport_babel::formats::docx::{ParagraphStyle, Run};
use mdport_babel::formats::DocxFormat;
use mdport_babel::{export, parse, ExportRequest};
use std::io::{Cursor, Read};
use zip::ZipArchive;

#[test]
fn test_sample_structure() {
    let doc = DocxFormat.build(&parse(SAMPLE));
    assert_eq!(doc.paragraphs.len(), 3);
    assert_eq!(doc.paragraphs[0].style, Some(ParagraphStyle::Heading1));
    assert!(doc.paragraphs[1].is_empty());

    let body = &doc.paragraphs[2];
    assert_eq!(body.style, None);
    assert_eq!(
        body.runs,
        vec![
            Run::plain("This is "),
            Run {
                text: "bold".to_string(),
                bold: true,
                italic: false,
            },
            Run::plain(" and "),
            Run {
                text: "italic".to_string(),
                bold: false,
                italic: true,
            },
            Run::plain("."),
        ]
    );
}

#[test]
fn test_heading_two_keeps_markers_stripped() {
    let doc = DocxFormat.build(&parse("## A **strong** heading"));
    assert_eq!(doc.paragraphs[0].style, Some(ParagraphStyle::Heading2));
    assert_eq!(doc.paragraphs[0].runs, vec![Run::plain("A strong heading")]);
}

#[test]
fn test_exported_archive_opens() {
    let artifact = export(&ExportRequest::new(SAMPLE, "docx")).unwrap();
    assert_eq!(artifact.filename, "document.docx");

    let bytes = artifact.document.into_bytes();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    assert!(xml.contains(r#"<w:t xml:space="preserve">Title</w:t>"#));
    assert!(xml.contains("<w:b/>"));
    assert!(xml.contains("<w:i/>"));
    assert!(archive.by_name("word/styles.xml").is_ok());
}

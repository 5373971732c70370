//! PDF export tests
//!
//! Page breaking is checked on the composed layout; the serialized bytes are only checked
//! for structure that `pdf-writer` emits verbatim.

use crate::common::{long_document, SAMPLE};
use mdport_babel::format::Format;
use mdport_babel::formats::pdf::layout::{compose, BODY_STYLE};
use mdport_babel::formats::pdf::{FontStyle, PageGeometry, PageSize};
use mdport_babel::formats::PdfFormat;
use mdport_babel::{export, parse, ExportRequest};
use proptest::prelude::*;

fn pdf_text(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn test_sample_renders_single_page() {
    let format = PdfFormat::default();
    let layout = format.layout(&parse(SAMPLE));
    assert_eq!(layout.page_count(), 1);

    let bytes = format.render(&parse(SAMPLE)).unwrap().into_bytes();
    let text = pdf_text(bytes);
    assert!(text.starts_with("%PDF-"));
    assert!(text.contains("/Count 1"));
    assert!(text.contains("/Helvetica-Bold"));
    assert!(text.contains("/Helvetica-Oblique"));
    assert!(text.contains("(Title)"));
}

#[test]
fn test_long_document_spans_pages() {
    let lines = parse(&long_document(100));
    let layout = PdfFormat::default().layout(&lines);

    // 37 body lines fit between the A4 margins
    assert_eq!(layout.page_count(), 3);
    let per_page: Vec<usize> = (0..3)
        .map(|page| layout.placements.iter().filter(|p| p.page == page).count())
        .collect();
    assert_eq!(per_page, vec![37, 37, 26]);
}

#[test]
fn test_letter_option_changes_media_box() {
    let artifact = export(
        &ExportRequest::new(SAMPLE, "pdf").with_option("page-size", "letter"),
    )
    .unwrap();
    assert_eq!(artifact.filename, "document.pdf");
    let text = pdf_text(artifact.document.into_bytes());
    assert!(text.contains("[0 0 612 792]"));
}

#[test]
fn test_letter_pages_hold_fewer_lines_than_a4() {
    let lines = parse(&long_document(200));
    let a4 = compose(&lines, PageGeometry::new(PageSize::A4));
    let letter = compose(&lines, PageGeometry::new(PageSize::Letter));
    assert!(letter.page_count() >= a4.page_count());
}

#[test]
fn test_emphasis_fonts_in_layout() {
    let layout = PdfFormat::default().layout(&parse("**loud** *soft* plain"));
    let styles: Vec<FontStyle> = layout.pages[0].items.iter().map(|i| i.style).collect();
    assert_eq!(styles.first(), Some(&FontStyle::Bold));
    assert!(styles.contains(&FontStyle::Italic));
    assert_eq!(styles.last(), Some(&FontStyle::Regular));
}

proptest! {
    #[test]
    fn test_lines_start_above_bottom_margin(
        words in prop::collection::vec("[a-z]{1,12}", 1..40),
        count in 1usize..150,
    ) {
        let line = words.join(" ");
        let source = vec![line; count].join("\n");
        let layout = compose(&parse(&source), PageGeometry::default());
        let geometry = layout.geometry;

        prop_assert_eq!(layout.placements.len(), count);
        for placement in &layout.placements {
            prop_assert!(placement.y <= geometry.break_threshold());
            prop_assert!(placement.page < layout.page_count());
        }
        for page in &layout.pages {
            for item in &page.items {
                prop_assert!(item.x >= geometry.margin_left);
                prop_assert!(item.y >= geometry.margin_top);
                prop_assert_eq!(item.size, BODY_STYLE.font_size);
            }
        }
    }
}

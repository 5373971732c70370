//! PDF serialization of a [`PagedLayout`]
//!
//! Object layout: catalog, page tree, one Type1 font object per style (shared by every
//! page), then a page object and a content stream per page.

use super::layout::{FontStyle, PagedLayout};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

const PRODUCER: &str = concat!("mdport ", env!("CARGO_PKG_VERSION"));

const FONTS: [(FontStyle, &[u8], &[u8]); 3] = [
    (FontStyle::Regular, b"F1", b"Helvetica"),
    (FontStyle::Bold, b"F2", b"Helvetica-Bold"),
    (FontStyle::Italic, b"F3", b"Helvetica-Oblique"),
];

fn resource_name(style: FontStyle) -> Name<'static> {
    let name = FONTS
        .iter()
        .find(|(font, _, _)| *font == style)
        .map_or(b"F1".as_slice(), |(_, name, _)| *name);
    Name(name)
}

/// Write the layout as a complete PDF file.
pub fn write_pdf(layout: &PagedLayout) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();
    let font_ids: Vec<Ref> = FONTS.iter().map(|_| alloc.bump()).collect();
    let page_ids: Vec<(Ref, Ref)> = layout
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id).producer(TextStr(PRODUCER));

    for (&(_, _, base_font), font_id) in FONTS.iter().zip(&font_ids) {
        pdf.type1_font(*font_id)
            .base_font(Name(base_font))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let geometry = layout.geometry;
    for (page, (page_id, content_id)) in layout.pages.iter().zip(&page_ids) {
        let mut page_writer = pdf.page(*page_id);
        page_writer.media_box(Rect::new(0.0, 0.0, geometry.width, geometry.height));
        page_writer.parent(tree_id);
        page_writer.contents(*content_id);
        {
            let mut resources = page_writer.resources();
            let mut fonts = resources.fonts();
            for (&(_, name, _), font_id) in FONTS.iter().zip(&font_ids) {
                fonts.pair(Name(name), *font_id);
            }
        }
        page_writer.finish();

        let mut content = Content::new();
        for item in &page.items {
            content.begin_text();
            content.set_font(resource_name(item.style), item.size);
            content.next_line(item.x, geometry.height - item.y);
            content.show(Str(&encode_win_ansi(&item.text)));
            content.end_text();
        }
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

/// Encode text for a WinAnsi Type1 font.
///
/// Printable ASCII and the Latin-1 range map to themselves; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ (0x20..=0x7e | 0xa0..=0xff) => code as u8,
            _ => b'?',
        })
        .collect()
}

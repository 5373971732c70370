//! OOXML packaging
//!
//! Produces the minimal set of parts Word needs to open a document:
//!
//! - `[Content_Types].xml`
//! - `_rels/.rels`
//! - `word/_rels/document.xml.rels` (links the styles part)
//! - `word/styles.xml` (Normal, Heading1, Heading2)
//! - `word/document.xml`
//!
//! Only `document.xml` depends on the content; the other parts are fixed.

use super::document::{Document, Paragraph, Run};
use crate::error::FormatError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::fmt::Display;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 in twentieths of a point, 20mm margins.
const PAGE_WIDTH_TWIPS: &str = "11906";
const PAGE_HEIGHT_TWIPS: &str = "16838";
const PAGE_MARGIN_TWIPS: &str = "1134";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="24"/><w:szCs w:val="24"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="120"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="44"/><w:szCs w:val="44"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="200" w:after="100"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style></w:styles>"#;

fn xml_error(err: impl Display) -> FormatError {
    FormatError::SerializationError(format!("docx xml: {err}"))
}

fn packaging_error(err: impl Display) -> FormatError {
    FormatError::Packaging(err.to_string())
}

/// Characters XML 1.0 allows in text content.
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..)
}

/// Replace characters that cannot appear in XML text with `?`.
fn xml_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|ch| if is_xml_char(ch) { ch } else { '?' })
                .collect(),
        )
    }
}

/// Serialize the document body part.
pub fn document_xml(doc: &Document) -> Result<String, FormatError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_error)?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WORDML_NS));
    writer.write_event(Event::Start(root)).map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("w:body")))
        .map_err(xml_error)?;

    for paragraph in &doc.paragraphs {
        write_paragraph(&mut writer, paragraph)?;
    }
    write_section_properties(&mut writer)?;

    writer
        .write_event(Event::End(BytesEnd::new("w:body")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("w:document")))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_paragraph(writer: &mut Writer<Vec<u8>>, paragraph: &Paragraph) -> Result<(), FormatError> {
    writer
        .write_event(Event::Start(BytesStart::new("w:p")))
        .map_err(xml_error)?;

    if let Some(style) = paragraph.style {
        writer
            .write_event(Event::Start(BytesStart::new("w:pPr")))
            .map_err(xml_error)?;
        let mut style_ref = BytesStart::new("w:pStyle");
        style_ref.push_attribute(("w:val", style.style_id()));
        writer.write_event(Event::Empty(style_ref)).map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("w:pPr")))
            .map_err(xml_error)?;
    }

    for run in &paragraph.runs {
        write_run(writer, run)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("w:p")))
        .map_err(xml_error)
}

fn write_run(writer: &mut Writer<Vec<u8>>, run: &Run) -> Result<(), FormatError> {
    writer
        .write_event(Event::Start(BytesStart::new("w:r")))
        .map_err(xml_error)?;

    if run.bold || run.italic {
        writer
            .write_event(Event::Start(BytesStart::new("w:rPr")))
            .map_err(xml_error)?;
        if run.bold {
            writer
                .write_event(Event::Empty(BytesStart::new("w:b")))
                .map_err(xml_error)?;
        }
        if run.italic {
            writer
                .write_event(Event::Empty(BytesStart::new("w:i")))
                .map_err(xml_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("w:rPr")))
            .map_err(xml_error)?;
    }

    let mut text = BytesStart::new("w:t");
    text.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(text)).map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(&xml_text(&run.text))))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("w:t")))
        .map_err(xml_error)?;

    writer
        .write_event(Event::End(BytesEnd::new("w:r")))
        .map_err(xml_error)
}

fn write_section_properties(writer: &mut Writer<Vec<u8>>) -> Result<(), FormatError> {
    writer
        .write_event(Event::Start(BytesStart::new("w:sectPr")))
        .map_err(xml_error)?;

    let mut size = BytesStart::new("w:pgSz");
    size.push_attribute(("w:w", PAGE_WIDTH_TWIPS));
    size.push_attribute(("w:h", PAGE_HEIGHT_TWIPS));
    writer.write_event(Event::Empty(size)).map_err(xml_error)?;

    let mut margins = BytesStart::new("w:pgMar");
    for side in ["w:top", "w:right", "w:bottom", "w:left"] {
        margins.push_attribute((side, PAGE_MARGIN_TWIPS));
    }
    writer.write_event(Event::Empty(margins)).map_err(xml_error)?;

    writer
        .write_event(Event::End(BytesEnd::new("w:sectPr")))
        .map_err(xml_error)
}

/// Assemble the complete `.docx` zip archive.
pub fn package(doc: &Document) -> Result<Vec<u8>, FormatError> {
    let document = document_xml(doc)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes()),
        ("word/styles.xml", STYLES.as_bytes()),
        ("word/document.xml", document.as_bytes()),
    ];
    for (name, body) in parts {
        zip.start_file(name, deflated).map_err(packaging_error)?;
        zip.write_all(body).map_err(packaging_error)?;
    }

    let cursor = zip.finish().map_err(packaging_error)?;
    Ok(cursor.into_inner())
}

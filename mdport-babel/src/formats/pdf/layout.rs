//! Page composition
//!
//! Turns classified lines into positioned text on fixed-size pages. Coordinates are in
//! points; `y` is measured from the top edge of the page down to the text baseline, the
//! writer flips it into PDF space.
//!
//! The vertical cursor starts at the top margin and every logical line advances it by the
//! line height of its style. Before a logical line is placed, a cursor past
//! `height - margin_bottom` starts a new page. This check never runs between the wrapped
//! rows of one paragraph, so a long paragraph may run into the bottom margin.

use super::metrics::text_width;
use crate::common::emphasis::parse_emphasis;
use crate::ir::nodes::{Emphasis, Line, LineKind, Segment};
use serde::{Deserialize, Deserializer, Serialize};

/// Margin on every side: 20mm.
const MARGIN: f32 = 56.69;

/// Font used for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl From<Emphasis> for FontStyle {
    fn from(emphasis: Emphasis) -> Self {
        match emphasis {
            Emphasis::None => FontStyle::Regular,
            Emphasis::Bold => FontStyle::Bold,
            Emphasis::Italic => FontStyle::Italic,
        }
    }
}

/// Supported paper sizes.
///
/// Deserializes from the same case-insensitive names as [`PageSize::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Parse a page size name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a4" => Some(PageSize::A4),
            "letter" => Some(PageSize::Letter),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::Letter => "letter",
        }
    }

    /// Width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        PageSize::from_name(&name).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown page size '{name}' (expected a4 or letter)"
            ))
        })
    }
}

/// Page dimensions and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    pub fn new(size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin_top: MARGIN,
            margin_bottom: MARGIN,
            margin_left: MARGIN,
            margin_right: MARGIN,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Cursor position past which the next logical line goes to a new page.
    pub fn break_threshold(&self) -> f32 {
        self.height - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

/// Font size and cursor advance for one kind of line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub font_size: f32,
    pub line_height: f32,
}

pub const HEADING1_STYLE: LineStyle = LineStyle {
    font_size: 22.0,
    line_height: 28.35,
};

pub const HEADING2_STYLE: LineStyle = LineStyle {
    font_size: 16.0,
    line_height: 22.68,
};

pub const BODY_STYLE: LineStyle = LineStyle {
    font_size: 12.0,
    line_height: 19.84,
};

/// A piece of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: FontStyle,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<PlacedText>,
}

/// Where a logical line started: page index and cursor position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    pub page: usize,
    pub y: f32,
}

/// Result of composing a document: the pages plus one placement per source line.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
    pub placements: Vec<LinePlacement>,
}

impl PagedLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lay out lines on pages of the given geometry.
pub fn compose(lines: &[Line], geometry: PageGeometry) -> PagedLayout {
    let mut composer = Composer::new(geometry);
    for line in lines {
        composer.place_line(line);
    }
    composer.finish()
}

struct Composer {
    geometry: PageGeometry,
    pages: Vec<Page>,
    current: Page,
    y: f32,
    placements: Vec<LinePlacement>,
}

impl Composer {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            y: geometry.margin_top,
            placements: Vec::new(),
        }
    }

    fn place_line(&mut self, line: &Line) {
        if self.y > self.geometry.break_threshold() {
            self.break_page();
        }
        self.placements.push(LinePlacement {
            page: self.pages.len(),
            y: self.y,
        });

        match line.kind {
            LineKind::Empty => self.y += BODY_STYLE.line_height / 2.0,
            LineKind::Heading1 => self.place_heading(&line.text, HEADING1_STYLE),
            LineKind::Heading2 => self.place_heading(&line.text, HEADING2_STYLE),
            LineKind::Paragraph => {
                let segments = parse_emphasis(&line.text);
                self.place_segments(&segments, BODY_STYLE);
            }
        }
    }

    fn place_heading(&mut self, text: &str, style: LineStyle) {
        self.place_segments(&[Segment::bold(text)], style);
    }

    /// Flow segments word by word, wrapping at the content width.
    fn place_segments(&mut self, segments: &[Segment], style: LineStyle) {
        let left = self.geometry.margin_left;
        let right = left + self.geometry.content_width();
        let mut x = left;

        for segment in segments {
            let font = FontStyle::from(segment.emphasis);
            let words: Vec<&str> = segment.text.split(' ').collect();
            let last = words.len().saturating_sub(1);

            for (index, word) in words.iter().enumerate() {
                let piece = if index < last {
                    format!("{word} ")
                } else {
                    (*word).to_string()
                };
                if piece.is_empty() {
                    continue;
                }

                let width = text_width(&piece, font, style.font_size);
                // A piece wider than the whole row still goes on the current row if it is empty
                if x + width > right && x > left {
                    self.y += style.line_height;
                    x = left;
                }
                self.current.items.push(PlacedText {
                    x,
                    y: self.y,
                    size: style.font_size,
                    style: font,
                    text: piece,
                });
                x += width;
            }
        }

        self.y += style.line_height;
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = self.geometry.margin_top;
    }

    fn finish(mut self) -> PagedLayout {
        self.pages.push(self.current);
        PagedLayout {
            geometry: self.geometry,
            pages: self.pages,
            placements: self.placements,
        }
    }
}

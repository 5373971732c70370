//! In-memory word-processor document
//!
//! A flat list of paragraphs, each optionally tagged with a heading style and holding styled
//! runs. This is the structure the DOCX package is generated from, and what tests inspect.

use crate::common::emphasis::parse_emphasis;
use crate::ir::nodes::{Emphasis, Line, LineKind, Segment};

/// Paragraph style ids, matching the entries in `word/styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading1,
    Heading2,
}

impl ParagraphStyle {
    pub fn style_id(self) -> &'static str {
        match self {
            ParagraphStyle::Heading1 => "Heading1",
            ParagraphStyle::Heading2 => "Heading2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }
}

impl From<Segment> for Run {
    fn from(segment: Segment) -> Self {
        Self {
            text: segment.text,
            bold: segment.emphasis == Emphasis::Bold,
            italic: segment.emphasis == Emphasis::Italic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Build one paragraph per line.
    pub fn from_lines(lines: &[Line]) -> Self {
        Self {
            paragraphs: lines.iter().map(paragraph_for).collect(),
        }
    }
}

fn paragraph_for(line: &Line) -> Paragraph {
    match line.kind {
        LineKind::Empty => Paragraph::default(),
        LineKind::Heading1 => heading(ParagraphStyle::Heading1, &line.text),
        LineKind::Heading2 => heading(ParagraphStyle::Heading2, &line.text),
        LineKind::Paragraph => {
            let mut runs: Vec<Run> = parse_emphasis(&line.text)
                .into_iter()
                .map(Run::from)
                .collect();
            // Body paragraphs always carry at least one run
            if runs.is_empty() {
                runs.push(Run::plain(""));
            }
            Paragraph { style: None, runs }
        }
    }
}

fn heading(style: ParagraphStyle, text: &str) -> Paragraph {
    Paragraph {
        style: Some(style),
        runs: vec![Run::plain(text)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_empty_paragraph() {
        let doc = Document::from_lines(&[Line::empty()]);
        assert_eq!(doc.paragraphs, vec![Paragraph::default()]);
    }

    #[test]
    fn test_heading_has_style_and_single_plain_run() {
        let doc = Document::from_lines(&[Line::new(LineKind::Heading2, "Sub")]);
        let paragraph = &doc.paragraphs[0];
        assert_eq!(paragraph.style, Some(ParagraphStyle::Heading2));
        assert_eq!(paragraph.runs, vec![Run::plain("Sub")]);
    }

    #[test]
    fn test_degenerate_paragraph_gets_empty_run() {
        let doc = Document::from_lines(&[Line::new(LineKind::Paragraph, "")]);
        assert_eq!(doc.paragraphs[0].runs, vec![Run::plain("")]);
    }

    #[test]
    fn test_runs_carry_emphasis_flags() {
        let doc = Document::from_lines(&[Line::new(LineKind::Paragraph, "**b** *i*")]);
        let runs = &doc.paragraphs[0].runs;
        assert_eq!(runs.len(), 3);
        assert!(runs[0].bold && !runs[0].italic);
        assert!(!runs[1].bold && !runs[1].italic);
        assert!(runs[2].italic && !runs[2].bold);
        assert_eq!(doc.paragraphs[0].text(), "b i");
    }
}

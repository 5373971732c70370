//! Core data structures for the Intermediate Representation (IR).

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Heading1,
    Heading2,
    Paragraph,
    Empty,
}

impl LineKind {
    /// Heading level (1 or 2) for heading lines.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineKind::Heading1 => Some(1),
            LineKind::Heading2 => Some(2),
            LineKind::Paragraph | LineKind::Empty => None,
        }
    }
}

/// One classified line of Markdown source.
///
/// Heading text has its `#` prefix and any emphasis markers removed. Paragraph text is the
/// trimmed source line, markers included. Empty lines carry empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(LineKind::Empty, String::new())
    }

    pub fn is_heading(&self) -> bool {
        self.kind.heading_level().is_some()
    }
}

/// Inline styling applied to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    None,
    Bold,
    Italic,
}

/// A run of text with a single emphasis value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Segment {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::None)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Italic)
    }
}

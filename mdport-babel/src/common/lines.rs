//! Line classification
//!
//! Every `\n` separated piece of the source becomes exactly one [`Line`], in source order.
//! Pieces are trimmed before classification, which also drops the `\r` of CRLF input.
//!
//! Classification precedence:
//!
//! | Trimmed line   | Kind      | Text                                  |
//! |----------------|-----------|---------------------------------------|
//! | (empty)        | Empty     | ""                                    |
//! | `# Title`      | Heading1  | after `"# "`, emphasis markers removed |
//! | `## Title`     | Heading2  | after `"## "`, emphasis markers removed|
//! | anything else  | Paragraph | trimmed line                          |
//!
//! Headings never keep inline emphasis. `### X` is not a heading at all.

use crate::common::emphasis::strip_emphasis;
use crate::ir::nodes::{Line, LineKind};

const HEADING1_PREFIX: &str = "# ";
const HEADING2_PREFIX: &str = "## ";

/// Split source text into classified lines.
pub fn parse_lines(content: &str) -> Vec<Line> {
    content.split('\n').map(classify_line).collect()
}

/// Classify a single raw source line.
pub fn classify_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Line::empty()
    } else if let Some(title) = trimmed.strip_prefix(HEADING1_PREFIX) {
        Line::new(LineKind::Heading1, strip_emphasis(title))
    } else if let Some(title) = trimmed.strip_prefix(HEADING2_PREFIX) {
        Line::new(LineKind::Heading2, strip_emphasis(title))
    } else {
        Line::new(LineKind::Paragraph, trimmed)
    }
}

//! Inline emphasis scanning
//!
//! Recognizes two single-level span kinds:
//!
//! - bold: `**inner**`
//! - italic: `*inner*`, where neither delimiter touches another `*`
//!
//! Inner text must be non-empty and the closing delimiter is the nearest one that fits
//! (shortest match). Spans never nest. Scanning repeatedly takes the earliest bold match and
//! the earliest italic match in the unconsumed text and keeps the one that starts first,
//! preferring bold on a tie. Anything that does not form a span (a lone trailing `*`, an
//! unclosed `**`) stays literal text.
//!
//! `*` is ASCII, so every delimiter position is a char boundary and byte slicing is safe.

use crate::ir::nodes::{Emphasis, Segment};
use std::ops::Range;

const STAR: u8 = b'*';

/// Location of one delimited span within the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    /// Whole match, delimiters included.
    outer: Range<usize>,
    /// Inner text, delimiters excluded.
    inner: Range<usize>,
}

/// Split text into styled segments.
///
/// Literal text between spans becomes [`Emphasis::None`] segments. Empty input yields no
/// segments; text without markers yields exactly one plain segment.
pub fn parse_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    loop {
        let next = match (find_bold(rest), find_italic(rest)) {
            (Some(bold), Some(italic)) if bold.outer.start <= italic.outer.start => {
                (bold, Emphasis::Bold)
            }
            (Some(bold), None) => (bold, Emphasis::Bold),
            (_, Some(italic)) => (italic, Emphasis::Italic),
            (None, None) => break,
        };
        let (span, emphasis) = next;

        if span.outer.start > 0 {
            segments.push(Segment::plain(&rest[..span.outer.start]));
        }
        segments.push(Segment::new(&rest[span.inner], emphasis));
        rest = &rest[span.outer.end..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}

/// Remove emphasis markers, keeping the inner text of every span.
pub fn strip_emphasis(text: &str) -> String {
    parse_emphasis(text)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}

fn find_bold(text: &str) -> Option<Span> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(open) = find_double_star(bytes, from) {
        if let Some(close) = find_double_star(bytes, open + 3) {
            return Some(Span {
                outer: open..close + 2,
                inner: open + 2..close,
            });
        }
        from = open + 1;
    }
    None
}

fn find_double_star(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len().saturating_sub(1)).find(|&i| bytes[i] == STAR && bytes[i + 1] == STAR)
}

fn find_italic(text: &str) -> Option<Span> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&open| is_lone_star(bytes, open))
        .find_map(|open| {
            (open + 2..bytes.len())
                .find(|&close| is_lone_star(bytes, close))
                .map(|close| Span {
                    outer: open..close + 1,
                    inner: open + 1..close,
                })
        })
}

fn is_lone_star(bytes: &[u8], i: usize) -> bool {
    bytes[i] == STAR
        && (i == 0 || bytes[i - 1] != STAR)
        && bytes.get(i + 1) != Some(&STAR)
}

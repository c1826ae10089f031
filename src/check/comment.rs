//! Leading comment location.
//!
//! Only two comment forms exist in the C-family grammars this targets:
//! `// line` comments and `/* block */` comments. Nothing else is lexed; the
//! scan skips whitespace and stops at the first other character.

use std::ops::Range;

/// A single comment token and its half-open byte range in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSpan {
    /// `// ...` comment. The range ends at the line terminator (or end of text).
    Line(Range<usize>),
    /// `/* ... */` comment. The range ends after the closing `*/`, or at end
    /// of text for an unterminated comment.
    Block(Range<usize>),
}

impl CommentSpan {
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Line(range) | Self::Block(range) => range.clone(),
        }
    }

    pub fn start(&self) -> usize {
        self.range().start
    }

    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Comment body with its delimiters stripped.
    pub fn inner_text<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Self::Line(range) => &text[range.start + 2..range.end],
            Self::Block(range) => {
                let body = &text[range.start + 2..range.end];
                body.strip_suffix("*/").unwrap_or(body)
            }
        }
    }
}

/// Whitespace that may precede the header: Unicode whitespace plus the BOM.
pub(crate) fn is_trivia_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Find the first comment at or after `from`, skipping only whitespace.
///
/// Returns `None` when the first non-whitespace content is not a comment
/// opener, or when the text ends first.
pub fn locate_leading_comment(text: &str, from: usize) -> Option<CommentSpan> {
    let rest = &text[from..];
    let skipped = rest.len() - rest.trim_start_matches(is_trivia_whitespace).len();
    let start = from + skipped;
    let tail = &text[start..];

    if tail.starts_with("//") {
        let end = tail.find(['\r', '\n']).map_or(text.len(), |pos| start + pos);
        Some(CommentSpan::Line(start..end))
    } else if tail.starts_with("/*") {
        let end = tail[2..]
            .find("*/")
            .map_or(text.len(), |pos| start + 2 + pos + 2);
        Some(CommentSpan::Block(start..end))
    } else {
        None
    }
}

//! Diagnostic and fix types produced by the header check.

use serde::Serialize;
use std::ops::Range;

/// Message for both a missing and a mismatched header.
pub const MISSING_HEADER_MESSAGE: &str = "missing file header";

/// Message for a valid header that is not followed by a blank line.
pub const MISSING_NEW_LINE_MESSAGE: &str = "missing new line following the file header";

/// A single contiguous text edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Start byte offset of the replaced range.
    pub from: usize,
    /// End byte offset (exclusive) of the replaced range.
    pub to: usize,
    /// Text spliced in place of `from..to`.
    pub replacement: String,
}

impl Fix {
    /// Insert `text` at `offset` without removing anything.
    pub fn insertion(offset: usize, text: impl Into<String>) -> Self {
        Self {
            from: offset,
            to: offset,
            replacement: text.into(),
        }
    }

    /// Replace the bytes in `range` with `text`.
    pub fn replacement(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            from: range.start,
            to: range.end,
            replacement: text.into(),
        }
    }

    /// Splice this fix into `text`.
    ///
    /// Offsets must lie on char boundaries of `text`; fixes produced by the
    /// check always do for the text they were computed from.
    pub fn apply(&self, text: &str) -> String {
        let mut out =
            String::with_capacity(text.len() - (self.to - self.from) + self.replacement.len());
        out.push_str(&text[..self.from]);
        out.push_str(&self.replacement);
        out.push_str(&text[self.to..]);
        out
    }
}

/// A header violation: a zero-width marker where a correct header belongs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range_start: usize,
    pub range_end: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Create a fixless, zero-width diagnostic at `offset`.
    pub fn at(offset: usize, message: impl Into<String>) -> Self {
        Self {
            range_start: offset,
            range_end: offset,
            message: message.into(),
            fix: None,
        }
    }

    /// The standard "missing file header" diagnostic.
    pub fn missing_header(offset: usize) -> Self {
        Self::at(offset, MISSING_HEADER_MESSAGE)
    }

    /// Attach a fix (or none).
    pub fn with_fix(mut self, fix: Option<Fix>) -> Self {
        self.fix = fix;
        self
    }
}

//! Header classification against the configured pattern.

use super::comment::{CommentSpan, is_trivia_whitespace};
use super::pattern::HeaderPattern;
use super::source::SourceUnit;

/// Outcome of testing the leading comment against the header pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The leading comment satisfies the pattern.
    Valid(CommentSpan),
    /// No leading comment at all.
    Missing,
    /// A leading comment exists but its body does not match.
    Mismatched {
        comment: CommentSpan,
        /// Only whitespace lies between the header offset and the comment,
        /// so the comment occupies the header slot and may be replaced.
        whitespace_gap: bool,
    },
}

/// Classify `comment` (the result of the locator run from `offset`).
pub fn validate_header(
    unit: &SourceUnit<'_>,
    offset: usize,
    comment: Option<CommentSpan>,
    pattern: &HeaderPattern,
) -> Verdict {
    let Some(comment) = comment else {
        return Verdict::Missing;
    };

    let text = unit.text();
    if pattern.is_match(comment.inner_text(text)) {
        return Verdict::Valid(comment);
    }

    let whitespace_gap = text
        .get(offset..comment.start())
        .is_some_and(|gap| gap.chars().all(is_trivia_whitespace));

    Verdict::Mismatched {
        comment,
        whitespace_gap,
    }
}

//! Fix synthesis for header violations.
//!
//! Fix policy:
//! - `Missing`: insert a rendered header at the header offset, followed by a
//!   blank line.
//! - `Mismatched` in the header slot: replace the comment itself, leaving the
//!   spacing after it untouched.
//! - `Mismatched` elsewhere: insert at the header offset, never overwriting
//!   text that is not the mismatched comment.
//!
//! Without an insertion template the diagnostic carries no fix. The marker is
//! always placed at the header offset, not at the mismatched comment.

use super::comment::CommentSpan;
use super::shebang::ends_mid_line;
use super::source::{LineEnding, SourceUnit};
use super::types::{Diagnostic, Fix, MISSING_NEW_LINE_MESSAGE};
use super::validator::Verdict;

/// Line endings appended after an inserted header (one blank line).
const INSERTION_TRAILING_LINES: usize = 2;

/// Render `template` as a block comment in the given line-ending convention.
///
/// ```text
/// /*
///  * <line 1>
///  * <line 2>
///  */
/// ```
///
/// followed by `trailing` line endings. Template lines may be separated by
/// either `\n` or `\r\n`; the output only ever uses `line_ending`.
pub fn render_comment(template: &str, line_ending: LineEnding, trailing: usize) -> String {
    let eol = line_ending.as_str();

    let mut lines = Vec::new();
    lines.push("/*".to_string());
    for line in template.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        lines.push(format!(" * {}", line));
    }
    lines.push(" */".to_string());

    let mut rendered = lines.join(eol);
    rendered.push_str(&eol.repeat(trailing));
    rendered
}

/// Turn a verdict into at most one diagnostic.
pub fn synthesize(
    unit: &SourceUnit<'_>,
    offset: usize,
    verdict: &Verdict,
    template: Option<&str>,
) -> Option<Diagnostic> {
    let fix = match verdict {
        Verdict::Valid(_) => return None,
        Verdict::Missing
        | Verdict::Mismatched {
            whitespace_gap: false,
            ..
        } => template.map(|t| insertion_fix(unit, offset, t)),
        Verdict::Mismatched {
            comment,
            whitespace_gap: true,
        } => template.map(|t| {
            Fix::replacement(comment.range(), render_comment(t, unit.line_ending(), 0))
        }),
    };

    Some(Diagnostic::missing_header(offset).with_fix(fix))
}

fn insertion_fix(unit: &SourceUnit<'_>, offset: usize, template: &str) -> Fix {
    let eol = unit.line_ending().as_str();
    let mut text = String::new();

    // Only an unterminated shebang leaves the offset mid-line.
    if ends_mid_line(&unit.text()[..offset]) {
        text.push_str(eol);
    }
    text.push_str(&render_comment(
        template,
        unit.line_ending(),
        INSERTION_TRAILING_LINES,
    ));

    Fix::insertion(offset, text)
}

/// Check that a valid header is followed by a blank line.
///
/// A header that ends the file, or is followed only by whitespace, is
/// accepted. The fix inserts just the missing line endings at the end of the
/// comment.
pub fn trailing_newline_diagnostic(
    unit: &SourceUnit<'_>,
    comment: &CommentSpan,
) -> Option<Diagnostic> {
    let rest = &unit.text()[comment.end()..];
    if rest.trim().is_empty() {
        return None;
    }

    let mut breaks = 0;
    let mut tail = rest;
    while breaks < INSERTION_TRAILING_LINES {
        if let Some(next) = tail.strip_prefix("\r\n").or_else(|| tail.strip_prefix('\n')) {
            tail = next;
            breaks += 1;
        } else {
            break;
        }
    }

    if breaks == INSERTION_TRAILING_LINES {
        return None;
    }

    let missing = unit
        .line_ending()
        .as_str()
        .repeat(INSERTION_TRAILING_LINES - breaks);
    Some(
        Diagnostic::at(comment.end(), MISSING_NEW_LINE_MESSAGE)
            .with_fix(Some(Fix::insertion(comment.end(), missing))),
    )
}

//! File header checking.
//!
//! A straight pipeline over one file's text:
//! - Shebang skip: where a header may begin
//! - Leading comment: first comment preceded only by whitespace
//! - Validation: comment body against the configured regex
//! - Fix synthesis: insertion or replacement in the file's line-ending style
//!
//! Error handling:
//! - Invalid regex patterns are config errors (exit 1), not violations (exit 2)
//! - Each check yields at most one diagnostic

mod comment;
mod fix;
mod pattern;
mod rule;
mod shebang;
mod source;
mod types;
mod validator;


// Re-export public API
pub use comment::{CommentSpan, locate_leading_comment};
pub use fix::{render_comment, synthesize, trailing_newline_diagnostic};
pub use pattern::{HeaderPattern, PatternCache};
pub use rule::{Checker, HeaderRule, RULE_NAME, check_file_header, checkers};
pub use shebang::header_offset;
pub use source::{LineEnding, SourceUnit};
pub use types::{Diagnostic, Fix, MISSING_HEADER_MESSAGE, MISSING_NEW_LINE_MESSAGE};
pub use validator::{Verdict, validate_header};

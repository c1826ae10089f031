//! The file-header rule and the checker entry point.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

use super::comment::locate_leading_comment;
use super::fix::{synthesize, trailing_newline_diagnostic};
use super::pattern::{HeaderPattern, PatternCache};
use super::shebang::header_offset;
use super::source::SourceUnit;
use super::types::Diagnostic;
use super::validator::{Verdict, validate_header};

/// Name under which the header checker is registered.
pub const RULE_NAME: &str = "file-header";

/// A checker maps one source unit and its rule configuration to at most one
/// diagnostic. Hosts keep a registry of these instead of a rule hierarchy.
pub type Checker = fn(&SourceUnit<'_>, &HeaderRule) -> Option<Diagnostic>;

static CHECKERS: &[(&str, Checker)] = &[(RULE_NAME, check_file_header)];

/// Registered checkers, by rule name.
pub fn checkers() -> &'static [(&'static str, Checker)] {
    CHECKERS
}

/// Compiled configuration for one header check.
///
/// Cheap to clone and safe to share between worker threads.
#[derive(Debug, Clone)]
pub struct HeaderRule {
    pattern: Arc<HeaderPattern>,
    insertion_text: Option<String>,
    enforce_trailing_newline: bool,
}

impl HeaderRule {
    /// Compile a rule from a pattern source and optional insertion text.
    ///
    /// # Returns
    ///
    /// * `Err(FileheadError::ConfigError)` - If the pattern fails to compile
    pub fn new(pattern: &str, insertion_text: Option<String>) -> Result<Self> {
        Ok(Self::with_pattern(
            Arc::new(HeaderPattern::new(pattern)?),
            insertion_text,
        ))
    }

    /// Build a rule around an already compiled pattern.
    pub fn with_pattern(pattern: Arc<HeaderPattern>, insertion_text: Option<String>) -> Self {
        Self {
            pattern,
            insertion_text,
            enforce_trailing_newline: false,
        }
    }

    /// Build a rule from config, compiling the pattern through `cache`.
    pub fn from_config(config: &Config, cache: &PatternCache) -> Result<Self> {
        let pattern = cache.get_or_compile(&config.header_pattern)?;
        Ok(Self::with_pattern(pattern, config.insertion_text.clone())
            .with_trailing_newline(config.enforce_trailing_newline))
    }

    /// Require a blank line after a valid header.
    pub fn with_trailing_newline(mut self, enforce: bool) -> Self {
        self.enforce_trailing_newline = enforce;
        self
    }

    pub fn pattern(&self) -> &HeaderPattern {
        &self.pattern
    }

    pub fn insertion_text(&self) -> Option<&str> {
        self.insertion_text.as_deref()
    }

    pub fn enforces_trailing_newline(&self) -> bool {
        self.enforce_trailing_newline
    }

    /// Check one file's text.
    pub fn check(&self, text: &str) -> Option<Diagnostic> {
        check_file_header(&SourceUnit::new(text), self)
    }
}

/// Run the header pipeline over one source unit.
///
/// Shebang offset, leading comment, pattern verdict, then fix synthesis.
/// Produces at most one diagnostic.
pub fn check_file_header(unit: &SourceUnit<'_>, rule: &HeaderRule) -> Option<Diagnostic> {
    let text = unit.text();
    let offset = header_offset(text);
    let comment = locate_leading_comment(text, offset);
    let verdict = validate_header(unit, offset, comment, rule.pattern());

    match &verdict {
        Verdict::Valid(comment) if rule.enforces_trailing_newline() => {
            trailing_newline_diagnostic(unit, comment)
        }
        _ => synthesize(unit, offset, &verdict, rule.insertion_text()),
    }
}

//! Compiled header patterns.

use crate::error::{FileheadError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A compiled header pattern.
///
/// Matching is unanchored: the pattern only has to match somewhere inside the
/// comment body. Anchor it explicitly (`^`, `$`) for stricter checks.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl HeaderPattern {
    /// Compile a header pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(HeaderPattern)` - Successfully compiled pattern
    /// * `Err(FileheadError::ConfigError)` - If the pattern fails to compile (exit 1)
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            FileheadError::ConfigError(format!(
                "invalid regex pattern in header_pattern: '{}' - {}\n\
                 Fix: edit .filehead.yaml (or --pattern) and correct the pattern.",
                pattern, e
            ))
        })?;
        Ok(Self { regex })
    }

    /// The pattern source as configured.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Read-through cache of compiled patterns keyed by pattern source.
///
/// Patterns are immutable per configuration load, so entries are never
/// invalidated. Failed compilations are not cached.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: Mutex<HashMap<String, Arc<HeaderPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled pattern for `pattern`, compiling it on first use.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<HeaderPattern>> {
        let mut patterns = self
            .patterns
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());

        if let Some(compiled) = patterns.get(pattern) {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(HeaderPattern::new(pattern)?);
        patterns.insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Number of distinct patterns compiled so far.
    pub fn len(&self) -> usize {
        self.patterns
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

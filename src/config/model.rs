//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the header check.
///
/// This struct represents the contents of `.filehead.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Header rule
    // =========================================================================
    /// Regex the leading comment's body must match (unanchored).
    pub header_pattern: String,

    /// Header body to insert when the header is missing or wrong.
    /// Without it, violations are reported but not fixable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertion_text: Option<String>,

    /// Require a blank line after a valid header.
    #[serde(default)]
    pub enforce_trailing_newline: bool,

    // =========================================================================
    // File discovery
    // =========================================================================
    /// File extensions to check (no leading dots, case-insensitive).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for paths to skip when walking directories.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_pattern: String::new(),
            insertion_text: None,
            enforce_trailing_newline: false,
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

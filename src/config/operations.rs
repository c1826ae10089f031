//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::check::HeaderPattern;
use crate::error::{FileheadError, Result};
use globset::Glob;
use std::path::Path;

impl Config {
    /// Read config from a YAML file without validating it.
    ///
    /// Command-line overrides still have to be applied before the result is
    /// validated.
    ///
    /// # Returns
    ///
    /// * `Err(FileheadError::ConfigError)` - Read or parse failure
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FileheadError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse_yaml(&content)
    }

    /// Parse and validate config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = Self::parse_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| FileheadError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FileheadError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Replace the pattern and/or insertion text with command-line values.
    pub fn with_overrides(mut self, pattern: Option<String>, insertion_text: Option<String>) -> Self {
        if let Some(pattern) = pattern {
            self.header_pattern = pattern;
        }
        if insertion_text.is_some() {
            self.insertion_text = insertion_text;
        }
        self
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `header_pattern` must be non-empty and compile as a regex
    /// - `insertion_text` must not contain `*/`, which would close the
    ///   rendered block comment early
    /// - `extensions` entries must be non-empty and have no leading dots
    /// - `exclude` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.header_pattern.trim().is_empty() {
            return Err(FileheadError::ConfigError(
                "config validation failed: header_pattern must be set.\n\
                 Fix: add `header_pattern: <regex>` to .filehead.yaml or pass --pattern."
                    .to_string(),
            ));
        }

        // Fail fast: a bad regex must never behave like "no match"
        HeaderPattern::new(&self.header_pattern)?;

        if self
            .insertion_text
            .as_deref()
            .is_some_and(|template| template.contains("*/"))
        {
            return Err(FileheadError::ConfigError(
                "config validation failed: insertion_text must not contain '*/'.\n\
                 Fix: remove the comment terminator from the template; it is wrapped in /* */ automatically."
                    .to_string(),
            ));
        }

        for ext in &self.extensions {
            if ext.is_empty() {
                return Err(FileheadError::ConfigError(
                    "config validation failed: extensions entries must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(FileheadError::ConfigError(format!(
                    "config validation failed: extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        for pattern in &self.exclude {
            Glob::new(pattern).map_err(|e| {
                FileheadError::ConfigError(format!(
                    "invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// Get extensions normalized to lowercase.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions.iter().map(|s| s.to_lowercase()).collect()
    }
}

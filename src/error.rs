//! Error types for filehead.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for filehead operations.
///
/// Header violations themselves are not errors; they are reported as
/// diagnostics. `ValidationError` only surfaces at the CLI boundary once
/// every file has been checked.
#[derive(Error, Debug)]
pub enum FileheadError {
    /// Configuration is unusable: bad YAML, invalid regex or glob, missing pattern.
    #[error("{0}")]
    ConfigError(String),

    /// Reading or writing a source file failed.
    #[error("{0}")]
    IoError(String),

    /// One or more files are missing a valid header.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl FileheadError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FileheadError::ConfigError(_) => exit_codes::USER_ERROR,
            FileheadError::IoError(_) => exit_codes::USER_ERROR,
            FileheadError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for filehead operations.
pub type Result<T> = std::result::Result<T, FileheadError>;

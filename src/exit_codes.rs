//! Exit code constants for the filehead CLI.
//!
//! - 0: Success (every checked file has a valid header)
//! - 1: User error (bad args, invalid config, unreadable files)
//! - 2: Validation failure (one or more files lack a valid header)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// Validation failure: at least one file is missing its header.
pub const VALIDATION_FAILURE: i32 = 2;

//! Filesystem utilities for filehead.
//!
//! File discovery for the CLI and atomic writes for applying fixes.

pub mod atomic;
mod discover;

pub use atomic::atomic_write_file;
pub use discover::{FileFilter, discover_files};

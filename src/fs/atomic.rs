//! Atomic file writes.
//!
//! Fixed files are written to a temporary sibling (`.{filename}.tmp`), synced,
//! then renamed over the original, so a crash never leaves a half-written
//! source file behind. Source and destination share a directory, so the
//! rename stays on one filesystem.

use crate::error::{FileheadError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(FileheadError::IoError)` - On write or rename failure
///
/// # Example
///
/// ```no_run
/// use filehead::fs::atomic_write_file;
///
/// atomic_write_file("src/lib.ts", "/*\n * Copyright 2017\n */\n\ncode();\n")?;
/// # Ok::<(), filehead::error::FileheadError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;
    atomic_replace(&temp_path, path)
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            FileheadError::IoError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        FileheadError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        FileheadError::IoError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        FileheadError::IoError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Replace `target` with `source`.
///
/// `rename` replaces an existing destination on both POSIX and Windows.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        FileheadError::IoError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })
}

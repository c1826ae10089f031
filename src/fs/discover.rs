//! Source file discovery.
//!
//! Explicitly named files are always checked. Directories are walked
//! recursively and only files whose extension is configured, and whose path
//! matches no `exclude` glob, are kept. Excluded directories are not entered.
//!
//! Exclude globs are tested against both the walked path as given and the
//! path relative to the directory being walked, so `dist/**` applies whether
//! the walk starts at `.` or at an absolute path.

use crate::config::Config;
use crate::error::{FileheadError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extension and exclude-glob filter applied while walking directories.
#[derive(Debug)]
pub struct FileFilter {
    /// Normalized extensions (lowercase, no leading dots).
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl FileFilter {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            extensions: config.normalized_extensions(),
            exclude: build_globset(&config.exclude)?,
        })
    }

    /// Check if a file's extension is configured for checking.
    pub fn should_check_file(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    /// Check if a path matches any exclude glob.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.is_match(normalize_path(path))
    }

    /// Check if a directory matches any exclude glob, either itself or as
    /// the prefix of everything below it (`dir/**`).
    fn is_excluded_dir(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        self.exclude.is_match(&normalized) || self.exclude.is_match(format!("{}/", normalized))
    }

    /// Whether a walk entry under `root` is excluded. The root itself never is.
    fn excludes_entry(&self, root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let is_dir = entry.file_type().is_dir();

        [path, relative].into_iter().any(|candidate| {
            if is_dir {
                self.is_excluded_dir(candidate)
            } else {
                self.is_excluded(candidate)
            }
        })
    }
}

/// Build a GlobSet from the exclude patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            FileheadError::ConfigError(format!(
                "invalid glob pattern in exclude: '{}' - {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| FileheadError::ConfigError(format!("failed to compile exclude globs: {}", e)))
}

/// Forward slashes, no leading `./`.
fn normalize_path(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    match normalized.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}

/// Expand `paths` into the sorted, de-duplicated list of files to check.
///
/// # Returns
///
/// * `Err(FileheadError::IoError)` - If a named path does not exist
pub fn discover_files(paths: &[PathBuf], filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        if !path.is_dir() {
            return Err(FileheadError::IoError(format!(
                "path '{}' does not exist",
                path.display()
            )));
        }

        let walker = WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !filter.excludes_entry(path, entry));

        for entry in walker.filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && filter.should_check_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

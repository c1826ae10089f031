//! Implementation of the `filehead check` command.
//!
//! # Steps
//!
//! 1. Resolve config (file + command-line overrides) and compile the rule
//! 2. Discover files from the given paths
//! 3. Check each file's header
//! 4. Print a text or JSON report
//!
//! # Exit Codes
//!
//! - 0: Every file has a valid header
//! - 1: Config or I/O error
//! - 2: One or more files failed

mod report;

use super::resolve_config;
use crate::cli::CheckArgs;
use filehead::check::{Diagnostic, HeaderRule, PatternCache};
use filehead::config::Config;
use filehead::error::{FileheadError, Result};
use filehead::fs::{FileFilter, discover_files};
use std::path::{Path, PathBuf};

pub(crate) use report::CheckReport;

/// One file's text and its check result.
#[derive(Debug)]
pub(crate) struct CheckedFile {
    pub path: PathBuf,
    pub text: String,
    pub diagnostic: Option<Diagnostic>,
}

/// Execute the `filehead check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = resolve_config(&args.rule)?;
    let rule = build_rule(&config)?;
    let checked = check_paths(&args.paths, &config, &rule)?;

    let report = CheckReport::from_checked(&checked);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.format_text());
    }

    if report.passed() {
        Ok(())
    } else {
        Err(FileheadError::ValidationError(format!(
            "{} file(s) missing a valid header",
            report.violations.len()
        )))
    }
}

/// Compile the header rule for this run.
pub(crate) fn build_rule(config: &Config) -> Result<HeaderRule> {
    HeaderRule::from_config(config, &PatternCache::new())
}

/// Discover and check every file under `paths`.
///
/// Files that are not valid UTF-8 are skipped with a warning.
pub(crate) fn check_paths(
    paths: &[PathBuf],
    config: &Config,
    rule: &HeaderRule,
) -> Result<Vec<CheckedFile>> {
    let filter = FileFilter::from_config(config)?;
    let files = discover_files(paths, &filter)?;

    let mut checked = Vec::with_capacity(files.len());
    for path in files {
        let Some(text) = read_source(&path)? else {
            continue;
        };
        let diagnostic = rule.check(&text);
        checked.push(CheckedFile {
            path,
            text,
            diagnostic,
        });
    }

    Ok(checked)
}

fn read_source(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        FileheadError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(_) => {
            eprintln!(
                "Warning: skipping '{}': not valid UTF-8",
                path.display()
            );
            Ok(None)
        }
    }
}

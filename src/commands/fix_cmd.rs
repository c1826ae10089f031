//! Implementation of the `filehead fix` command.
//!
//! Applies each file's fix and re-checks, since replacing a header can
//! surface the trailing-newline diagnostic on the next pass. Files are only
//! written when their text changed, and always atomically.

use super::check_cmd::{CheckReport, CheckedFile, build_rule, check_paths};
use super::resolve_config;
use crate::cli::FixArgs;
use filehead::check::HeaderRule;
use filehead::error::{FileheadError, Result};
use filehead::fs::atomic_write_file;

/// Upper bound on fix/re-check rounds per file.
const MAX_FIX_PASSES: usize = 3;

/// Execute the `filehead fix` command.
///
/// # Exit Codes
///
/// - 0: Every file is valid after fixing
/// - 1: Config or I/O error
/// - 2: Some files could not be fixed (no insertion text, or the
///   insertion text does not satisfy the pattern)
pub fn cmd_fix(args: FixArgs) -> Result<()> {
    let config = resolve_config(&args.rule)?;
    let rule = build_rule(&config)?;
    let checked = check_paths(&args.paths, &config, &rule)?;

    let mut remaining = Vec::new();
    let mut fixed_count = 0;

    for file in checked {
        let Some(fixed) = fix_text(&rule, &file.text) else {
            remaining.push(file);
            continue;
        };

        if fixed != file.text {
            atomic_write_file(&file.path, &fixed)?;
            println!("Fixed: {}", file.path.display());
            fixed_count += 1;
        }

        let diagnostic = rule.check(&fixed);
        if diagnostic.is_some() {
            remaining.push(CheckedFile {
                path: file.path,
                text: fixed,
                diagnostic,
            });
        }
    }

    if remaining.is_empty() {
        println!("{} file(s) fixed.", fixed_count);
        return Ok(());
    }

    print!("{}", CheckReport::from_checked(&remaining).format_text());
    Err(FileheadError::ValidationError(format!(
        "{} file(s) could not be fixed",
        remaining.len()
    )))
}

/// Apply fixes until the text checks clean or no fix is offered.
///
/// Returns `None` when the first check already offers no fix, so nothing can
/// be changed.
pub(crate) fn fix_text(rule: &HeaderRule, text: &str) -> Option<String> {
    let mut current = text.to_string();

    for pass in 0..MAX_FIX_PASSES {
        let Some(diagnostic) = rule.check(&current) else {
            break;
        };
        match diagnostic.fix {
            Some(fix) => current = fix.apply(&current),
            None if pass == 0 => return None,
            None => break,
        }
    }

    Some(current)
}

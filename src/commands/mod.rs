//! Command implementations for filehead.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config resolution they share.

mod check_cmd;
mod fix_cmd;
mod init;

#[cfg(test)]
mod tests;

use crate::cli::{Command, RuleArgs};
use filehead::config::{Config, DEFAULT_CONFIG_FILE};
use filehead::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check_cmd::cmd_check(args),
        Command::Fix(args) => fix_cmd::cmd_fix(args),
        Command::Init(args) => init::cmd_init(args),
    }
}

/// Resolve the effective config for a rule-running command.
///
/// Order: explicit `--config` file, else `.filehead.yaml` in the current
/// directory if present, else defaults; then `--pattern`/`--template`
/// overrides; then validation.
pub(crate) fn resolve_config(args: &RuleArgs) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::read(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Config::read(DEFAULT_CONFIG_FILE)?,
        None => Config::default(),
    };

    let config = config.with_overrides(args.pattern.clone(), args.template.clone());
    config.validate()?;
    Ok(config)
}

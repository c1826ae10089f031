//! CLI argument parsing for filehead.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filehead: check that source files start with a required header comment.
///
/// The header is the first comment in the file, after an optional shebang
/// line and blank lines. Its body must match a regular expression; when an
/// insertion text is configured, missing or wrong headers can be fixed.
#[derive(Parser, Debug)]
#[command(name = "filehead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for filehead.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report files whose header is missing or does not match.
    ///
    /// Exits with code 2 when any file fails.
    Check(CheckArgs),

    /// Insert or replace headers in place.
    ///
    /// Requires an insertion text; files that cannot be fixed are reported
    /// and the command exits with code 2.
    Fix(FixArgs),

    /// Write a starter `.filehead.yaml` in the current directory.
    Init(InitArgs),
}

/// Options shared by commands that run the header rule.
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// Config file (default: `.filehead.yaml` if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Header regex, overriding `header_pattern` from the config file.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Header text to insert, overriding `insertion_text` from the config file.
    #[arg(short, long)]
    pub template: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or directories to check.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub rule: RuleArgs,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fix` command.
#[derive(Parser, Debug)]
pub struct FixArgs {
    /// Files or directories to fix.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub rule: RuleArgs,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Header regex to write into the new config.
    #[arg(short, long, default_value = r"Copyright \d{4}")]
    pub pattern: String,

    /// Header text to write into the new config.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

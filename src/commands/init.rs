//! Implementation of the `filehead init` command.
//!
//! Writes a starter `.filehead.yaml` to the current directory. The generated
//! file is validated before it is written, so an invalid `--pattern` is
//! rejected up front.

use crate::cli::InitArgs;
use filehead::config::{Config, DEFAULT_CONFIG_FILE};
use filehead::error::{FileheadError, Result};
use filehead::fs::atomic_write_file;
use std::path::Path;

/// Execute the `filehead init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(FileheadError::ConfigError(format!(
            "'{}' already exists.\n\
             Fix: edit it directly, or rerun with --force to overwrite.",
            DEFAULT_CONFIG_FILE
        )));
    }

    let config = Config {
        header_pattern: args.pattern,
        insertion_text: args.template,
        ..Default::default()
    };
    config.validate()?;

    atomic_write_file(path, &config.to_yaml()?)?;
    println!("Created {}", DEFAULT_CONFIG_FILE);
    Ok(())
}

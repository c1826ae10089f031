//! Tests for the CLI commands.
//!
//! Commands resolve `.filehead.yaml` relative to the working directory, so
//! every test here runs serially.

use super::check_cmd::{CheckReport, CheckedFile, build_rule, check_paths, cmd_check};
use super::fix_cmd::{cmd_fix, fix_text};
use super::init::cmd_init;
use super::resolve_config;
use crate::cli::{CheckArgs, FixArgs, InitArgs, RuleArgs};
use crate::test_support::{DirGuard, write_file};
use filehead::check::{Diagnostic, HeaderRule};
use filehead::config::Config;
use filehead::error::FileheadError;
use filehead::exit_codes;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =========================================================================
// Helper functions
// =========================================================================

const PATTERN: &str = r"Copyright \d{4}";

fn rule_args(template: Option<&str>) -> RuleArgs {
    RuleArgs {
        config: None,
        pattern: Some(PATTERN.to_string()),
        template: template.map(String::from),
    }
}

fn check_args(paths: Vec<PathBuf>, template: Option<&str>) -> CheckArgs {
    CheckArgs {
        paths,
        rule: rule_args(template),
        json: false,
    }
}

fn fix_args(paths: Vec<PathBuf>, rule: RuleArgs) -> FixArgs {
    FixArgs { paths, rule }
}

// =========================================================================
// Config resolution
// =========================================================================

#[test]
#[serial]
fn test_resolve_config_requires_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let err = resolve_config(&RuleArgs::default()).unwrap_err();
    assert!(matches!(err, FileheadError::ConfigError(_)));
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
#[serial]
fn test_resolve_config_reads_default_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        ".filehead.yaml",
        "header_pattern: MIT\ninsertion_text: MIT License\n",
    );
    let _guard = DirGuard::new(temp_dir.path());

    let config = resolve_config(&RuleArgs::default()).unwrap();
    assert_eq!(config.header_pattern, "MIT");
    assert_eq!(config.insertion_text.as_deref(), Some("MIT License"));
}

#[test]
#[serial]
fn test_resolve_config_flags_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_file(
        temp_dir.path(),
        "ci.yaml",
        "header_pattern: MIT\ninsertion_text: MIT License\n",
    );

    let args = RuleArgs {
        config: Some(config_path),
        pattern: Some("Apache".to_string()),
        template: None,
    };
    let config = resolve_config(&args).unwrap();

    assert_eq!(config.header_pattern, "Apache");
    assert_eq!(config.insertion_text.as_deref(), Some("MIT License"));
}

#[test]
#[serial]
fn test_resolve_config_rejects_invalid_pattern() {
    let args = RuleArgs {
        config: None,
        pattern: Some("Copyright (".to_string()),
        template: None,
    };
    let err = resolve_config(&args).unwrap_err();
    assert!(err.to_string().contains("invalid regex pattern"));
}

// =========================================================================
// check
// =========================================================================

#[test]
#[serial]
fn test_check_passes_with_valid_headers() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "a.ts", "/* Copyright 2020 */\ncode();\n");
    write_file(root, "b.js", "#!/usr/bin/env node\n// Copyright 2021\n");

    cmd_check(check_args(vec![root.to_path_buf()], None)).unwrap();
}

#[test]
#[serial]
fn test_check_fails_with_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "a.ts", "/* Copyright 2020 */\ncode();\n");
    write_file(root, "b.ts", "code();\n");

    let err = cmd_check(check_args(vec![root.to_path_buf()], None)).unwrap_err();
    assert!(matches!(err, FileheadError::ValidationError(ref msg) if msg.starts_with("1 file")));
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
}

#[test]
#[serial]
fn test_check_does_not_modify_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "a.ts", "code();\n");

    let _ = cmd_check(check_args(vec![path.clone()], Some("Copyright 2017")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "code();\n");
}

#[test]
#[serial]
fn test_check_skips_non_utf8_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bin.c");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let config = Config {
        header_pattern: PATTERN.to_string(),
        ..Default::default()
    };
    let rule = build_rule(&config).unwrap();
    let checked = check_paths(&[path], &config, &rule).unwrap();
    assert!(checked.is_empty());
}

#[test]
#[serial]
fn test_check_missing_path_is_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = cmd_check(check_args(vec![temp_dir.path().join("absent")], None)).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

// =========================================================================
// Report formatting
// =========================================================================

#[test]
fn test_report_text_lists_locations() {
    let checked = vec![
        CheckedFile {
            path: PathBuf::from("src/ok.ts"),
            text: "/* Copyright 2020 */".to_string(),
            diagnostic: None,
        },
        CheckedFile {
            path: PathBuf::from("bin/cli.js"),
            text: "#!/usr/bin/env node\nrun();".to_string(),
            diagnostic: Some(Diagnostic::missing_header(20)),
        },
    ];

    let report = CheckReport::from_checked(&checked);
    assert!(!report.passed());
    assert_eq!(report.files_checked, 2);
    assert_eq!(report.violations[0].line, 2);
    assert_eq!(report.violations[0].column, 1);

    let text = report.format_text();
    assert!(text.contains("bin/cli.js:2:1  missing file header"));
    assert!(text.contains("1 of 2 files failed (0 fixable with `filehead fix`)"));
}

#[test]
fn test_report_passed_summary() {
    let report = CheckReport::from_checked(&[]);
    assert!(report.passed());
    assert_eq!(report.format_text(), "Checked 0 file(s): all headers valid.\n");
}

#[test]
fn test_report_json() {
    let checked = vec![CheckedFile {
        path: PathBuf::from("a.ts"),
        text: "code();".to_string(),
        diagnostic: Some(Diagnostic::missing_header(0)),
    }];

    let json = CheckReport::from_checked(&checked).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["files_checked"], 1);
    assert_eq!(value["violations"][0]["path"], "a.ts");
    assert_eq!(value["violations"][0]["rule"], "file-header");
    assert_eq!(value["violations"][0]["message"], "missing file header");
    assert_eq!(value["violations"][0]["fixable"], false);
}

// =========================================================================
// fix
// =========================================================================

#[test]
#[serial]
fn test_fix_inserts_and_replaces_headers() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let missing = write_file(root, "a.ts", "code();\n");
    let wrong = write_file(root, "b.ts", "/* MIT */\ncode();\n");
    let shebang = write_file(root, "c.js", "#!/usr/bin/env node\nrun();\n");
    let crlf = write_file(root, "d.c", "int x;\r\n");
    let valid = write_file(root, "e.ts", "// Copyright 2020\ncode();\n");

    cmd_fix(fix_args(
        vec![root.to_path_buf()],
        rule_args(Some("Copyright 2017")),
    ))
    .unwrap();

    assert_eq!(
        fs::read_to_string(&missing).unwrap(),
        "/*\n * Copyright 2017\n */\n\ncode();\n"
    );
    assert_eq!(
        fs::read_to_string(&wrong).unwrap(),
        "/*\n * Copyright 2017\n */\ncode();\n"
    );
    assert_eq!(
        fs::read_to_string(&shebang).unwrap(),
        "#!/usr/bin/env node\n/*\n * Copyright 2017\n */\n\nrun();\n"
    );
    assert_eq!(
        fs::read_to_string(&crlf).unwrap(),
        "/*\r\n * Copyright 2017\r\n */\r\n\r\nint x;\r\n"
    );
    assert_eq!(
        fs::read_to_string(&valid).unwrap(),
        "// Copyright 2020\ncode();\n"
    );

    // A second run has nothing left to do
    cmd_check(check_args(vec![root.to_path_buf()], None)).unwrap();
}

#[test]
#[serial]
fn test_fix_without_template_reports_and_leaves_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "a.ts", "code();\n");

    let err = cmd_fix(fix_args(vec![path.clone()], rule_args(None))).unwrap_err();

    assert!(matches!(err, FileheadError::ValidationError(ref msg) if msg.contains("could not be fixed")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "code();\n");
}

#[test]
#[serial]
fn test_fix_applies_trailing_newline_in_second_pass() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let config_path = write_file(
        root,
        "ci.yaml",
        "header_pattern: 'Copyright \\d{4}'\n\
         insertion_text: Copyright 2017\n\
         enforce_trailing_newline: true\n",
    );
    let path = write_file(root, "a.ts", "/* MIT */\ncode();\n");

    let rule = RuleArgs {
        config: Some(config_path),
        pattern: None,
        template: None,
    };
    cmd_fix(fix_args(vec![path.clone()], rule)).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "/*\n * Copyright 2017\n */\n\ncode();\n"
    );
}

#[test]
fn test_fix_text_with_non_matching_template_still_fails() {
    let rule = HeaderRule::new(PATTERN, Some("MIT License".to_string())).unwrap();
    let fixed = fix_text(&rule, "code();").unwrap();

    assert!(fixed.starts_with("/*\n * MIT License\n */"));
    assert!(rule.check(&fixed).is_some());
}

#[test]
fn test_fix_text_without_fix_returns_none() {
    let rule = HeaderRule::new(PATTERN, None).unwrap();
    assert_eq!(fix_text(&rule, "code();"), None);
    assert_eq!(
        fix_text(&rule, "// Copyright 2020\n").as_deref(),
        Some("// Copyright 2020\n")
    );
}

// =========================================================================
// init
// =========================================================================

#[test]
#[serial]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let args = || InitArgs {
        pattern: PATTERN.to_string(),
        template: Some("Copyright 2017".to_string()),
        force: false,
    };

    cmd_init(args()).unwrap();
    let config = Config::read(".filehead.yaml").unwrap();
    assert_eq!(config.header_pattern, PATTERN);
    assert_eq!(config.insertion_text.as_deref(), Some("Copyright 2017"));

    let err = cmd_init(args()).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    cmd_init(InitArgs {
        pattern: "MIT".to_string(),
        template: None,
        force: true,
    })
    .unwrap();
    let config = Config::read(".filehead.yaml").unwrap();
    assert_eq!(config.header_pattern, "MIT");
    assert!(config.insertion_text.is_none());
}

#[test]
#[serial]
fn test_init_rejects_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let err = cmd_init(InitArgs {
        pattern: "[".to_string(),
        template: None,
        force: false,
    })
    .unwrap_err();

    assert!(matches!(err, FileheadError::ConfigError(_)));
    assert!(!std::path::Path::new(".filehead.yaml").exists());
}

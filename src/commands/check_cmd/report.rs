//! Check report formatting (text and JSON).

use super::CheckedFile;
use filehead::check::{RULE_NAME, SourceUnit};
use filehead::error::{FileheadError, Result};
use serde::Serialize;

/// A single failed file, with the diagnostic mapped to line/column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Violation {
    /// File path (forward slashes).
    pub path: String,
    /// 1-based line of the marker.
    pub line: usize,
    /// 1-based column of the marker.
    pub column: usize,
    pub rule: &'static str,
    pub message: String,
    /// Whether `filehead fix` can repair it.
    pub fixable: bool,
}

/// Result of checking a set of files.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckReport {
    pub files_checked: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn from_checked(checked: &[CheckedFile]) -> Self {
        let violations = checked
            .iter()
            .filter_map(|file| {
                let diag = file.diagnostic.as_ref()?;
                let (line, column) = SourceUnit::new(&file.text).line_col(diag.range_start);
                Some(Violation {
                    path: file.path.to_string_lossy().replace('\\', "/"),
                    line,
                    column,
                    rule: RULE_NAME,
                    message: diag.message.clone(),
                    fixable: diag.fix.is_some(),
                })
            })
            .collect();

        Self {
            files_checked: checked.len(),
            violations,
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Format the report for the terminal.
    ///
    /// ```text
    /// File header violations
    ///
    /// src/app.ts:1:1  missing file header
    /// bin/cli.js:2:1  missing file header
    ///
    /// 2 of 14 files failed (2 fixable with `filehead fix`)
    /// ```
    pub fn format_text(&self) -> String {
        if self.passed() {
            return format!(
                "Checked {} file(s): all headers valid.\n",
                self.files_checked
            );
        }

        let mut msg = String::from("File header violations\n\n");
        for violation in &self.violations {
            msg.push_str(&format!(
                "{}:{}:{}  {}\n",
                violation.path, violation.line, violation.column, violation.message
            ));
        }

        let fixable = self.violations.iter().filter(|v| v.fixable).count();
        msg.push_str(&format!(
            "\n{} of {} files failed ({} fixable with `filehead fix`)\n",
            self.violations.len(),
            self.files_checked,
            fixable
        ));
        msg
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            FileheadError::IoError(format!("failed to serialize report to JSON: {}", e))
        })
    }
}

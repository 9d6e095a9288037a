//! Structured linter payloads into `RunResult`.
//!
//! Two payload shapes are understood:
//! - the primary linter's report: `{"files": [{"path", "offenses": [...]}]}`
//! - the auxiliary checker's flat comment array, grouped by file here and
//!   mapped onto the same offense fields.
//!
//! Paths are made absolute against `base` (canonicalized when the file
//! exists). Files with no offenses are dropped.

use crate::models::{LineLocation, OffenseRecord, RunResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LinterReport {
    #[serde(default)]
    files: Vec<LinterFile>,
}

#[derive(Deserialize)]
struct LinterFile {
    path: String,
    #[serde(default)]
    offenses: Vec<LinterOffense>,
}

#[derive(Deserialize)]
struct LinterOffense {
    severity: String,
    message: String,
    cop_name: String,
    #[serde(default)]
    corrected: bool,
    #[serde(default)]
    correctable: bool,
    location: LinterLocation,
}

#[derive(Deserialize)]
struct LinterLocation {
    line: usize,
    column: usize,
    #[serde(default)]
    length: usize,
}

#[derive(Deserialize)]
struct CheckerComment {
    file: String,
    line: usize,
    #[serde(rename = "endLine")]
    end_line: Option<usize>,
    column: usize,
    #[serde(rename = "endColumn")]
    end_column: Option<usize>,
    level: String,
    code: u32,
    message: String,
    #[serde(default)]
    fix: Option<serde_json::Value>,
}

/// Parse the primary linter's structured report.
pub fn parse(payload: &str, base: &Path) -> Result<RunResult, serde_json::Error> {
    let report: LinterReport = serde_json::from_str(payload)?;
    let mut result = RunResult::new();
    for file in report.files {
        let offenses = file
            .offenses
            .into_iter()
            .map(|o| OffenseRecord {
                severity: o.severity,
                message: o.message,
                rule_id: o.cop_name,
                corrected: o.corrected,
                correctable: o.correctable,
                location: LineLocation::new(o.location.line, o.location.column, o.location.length),
            })
            .collect();
        result.insert(absolutize(&file.path, base), offenses);
    }
    Ok(result)
}

/// Parse the auxiliary checker's comment array.
pub fn parse_checker(payload: &str, base: &Path) -> Result<RunResult, serde_json::Error> {
    let comments: Vec<CheckerComment> = serde_json::from_str(payload)?;
    let mut result = RunResult::new();
    for c in comments {
        let length = match (c.end_line, c.end_column) {
            (Some(end_line), Some(end_column)) if end_line == c.line => {
                end_column.saturating_sub(c.column)
            }
            _ => 0,
        };
        let offense = OffenseRecord {
            severity: checker_severity(&c.level).to_string(),
            message: c.message,
            rule_id: format!("SC{}", c.code),
            corrected: false,
            correctable: c.fix.as_ref().is_some_and(|f| !f.is_null()),
            location: LineLocation::new(c.line, c.column, length),
        };
        result.insert(absolutize(&c.file, base), vec![offense]);
    }
    Ok(result)
}

/// Map checker levels onto the primary linter's severity names.
fn checker_severity(level: &str) -> &str {
    match level {
        "style" => "refactor",
        "info" => "convention",
        other => other,
    }
}

fn absolutize(path: &str, base: &Path) -> PathBuf {
    let joined = base.join(path);
    std::fs::canonicalize(&joined).unwrap_or(joined)
}

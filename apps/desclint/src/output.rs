//! Output rendering for audit, correct, and style commands.
//!
//! Supports `human` (default) and `json` outputs; `style` additionally has
//! `concise`, one rendered line per offense grouped by file.

use crate::audit::AuditReport;
use crate::models::{OffenseRecord, RunResult};
use crate::style::{AuxiliaryStatus, StyleReport};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// One-line form of an offense:
/// `<S>: <line>: col <column>: [<rule-id>: ][Corrected ]<message>`.
pub fn render(offense: &OffenseRecord, show_rule_id: bool) -> String {
    let mut line = format!(
        "{}: {}: ",
        offense.severity_code(),
        offense.location.to_short_string()
    );
    if show_rule_id {
        line.push_str(&offense.rule_id);
        line.push_str(": ");
    }
    if offense.corrected {
        line.push_str("[Corrected] ");
    }
    line.push_str(&offense.message);
    line
}

/// Print description audit results in the requested format.
pub fn print_audit(report: &AuditReport, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_audit_json(report))),
        _ => {
            let color = use_colors(output);
            for res in &report.results {
                let subject = format!("{} ({})", res.name, res.kind);
                let subject = if color {
                    subject.bold().to_string()
                } else {
                    subject
                };
                for p in &res.problems {
                    let (icon, sev) = if color {
                        (
                            "▲".yellow().to_string(),
                            "⟦convention⟧".yellow().bold().to_string(),
                        )
                    } else {
                        ("▲".to_string(), "⟦convention⟧".to_string())
                    };
                    println!("{} {} {} ❲{}❳ — {}", icon, sev, subject, p.rule, p.message);
                }
                if let Some(fixed) = &res.correction {
                    if color {
                        println!("  {} {}", "↳ corrected:".green().bold(), fixed);
                    } else {
                        println!("  ↳ corrected: {}", fixed);
                    }
                }
            }
            let s = &report.summary;
            let summary = format!(
                "— Summary — entries={} flagged={} problems={} corrected={}",
                s.entries, s.flagged, s.problems, s.corrected
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the outcome of correcting a single token.
pub fn print_correction(original: &str, corrected: Option<&str>, output: &str) {
    match output {
        "json" => println!(
            "{}",
            to_pretty(&json!({
                "original": original,
                "corrected": corrected,
                "changed": corrected.is_some(),
            }))
        ),
        _ => match corrected {
            Some(fixed) => println!("{}", fixed),
            None => {
                eprintln!("{} no correction needed or possible", utils::note_prefix());
                println!("{}", original);
            }
        },
    }
}

/// Print structured style results. Print-mode runs have already written
/// their own output and carry no result.
pub fn print_style(report: &StyleReport, output: &str, show_rule_id: bool) {
    let Some(result) = report.result.as_ref() else {
        return;
    };
    match output {
        "json" => println!("{}", to_pretty(&compose_style_json(report))),
        _ => {
            let color = use_colors(output);
            let cwd = std::env::current_dir().unwrap_or_default();
            for (path, offenses) in result.iter() {
                let shown = display_path(path, &cwd);
                if color {
                    println!("{}", shown.bold());
                } else {
                    println!("{}", shown);
                }
                for o in offenses {
                    println!("  {}", render(o, show_rule_id));
                }
            }
            let summary = format!(
                "— Summary — files={} offenses={} corrected={}",
                result.len(),
                result.total_offenses(),
                result.corrected_offenses()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Path relative to `cwd` when that is shorter, else as given.
fn display_path(path: &Path, cwd: &Path) -> String {
    pathdiff::diff_paths(path, cwd)
        .filter(|rel| !rel.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Compose audit JSON object (pure) for testing/snapshot purposes.
pub fn compose_audit_json(report: &AuditReport) -> JsonVal {
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}

/// Compose style JSON object (pure) for testing/snapshot purposes.
pub fn compose_style_json(report: &StyleReport) -> JsonVal {
    let files: Vec<_> = report
        .result
        .iter()
        .flat_map(RunResult::iter)
        .map(|(path, offenses)| {
            json!({
                "path": path.to_string_lossy(),
                "offenses": offenses,
            })
        })
        .collect();
    let auxiliary = match &report.auxiliary {
        AuxiliaryStatus::NotRequested => json!({"status": "not-requested"}),
        AuxiliaryStatus::Skipped { reason } => json!({"status": "skipped", "reason": reason}),
        AuxiliaryStatus::Ran(outcome) => json!({"status": "ran", "outcome": outcome}),
    };
    let (file_count, offense_count, corrected) = report
        .result
        .as_ref()
        .map(|r| (r.len(), r.total_offenses(), r.corrected_offenses()))
        .unwrap_or_default();
    json!({
        "outcome": report.outcome,
        "files": files,
        "auxiliary": auxiliary,
        "summary": {
            "files": file_count,
            "offenses": offense_count,
            "corrected": corrected,
        },
    })
}

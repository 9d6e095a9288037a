//! Batch description audits.
//!
//! Entries are independent, so they are audited in parallel against one
//! shared read-only rulebook. Results keep manifest order.

use crate::desc::{DescriptionCorrector, DescriptionRuleEngine, DescriptionToken, RuleBook};
use crate::error::ManifestError;
use crate::models::manifest::{AuditEntry, Manifest};
use crate::models::{ItemKind, Problem};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct AuditResult {
    pub kind: ItemKind,
    pub name: String,
    pub desc: Option<String>,
    pub problems: Vec<Problem>,
    /// Corrected token source, when fixing was requested and possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuditSummary {
    pub entries: usize,
    pub flagged: usize,
    pub problems: usize,
    pub corrected: usize,
}

#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub results: Vec<AuditResult>,
    pub summary: AuditSummary,
}

impl AuditReport {
    pub fn has_problems(&self) -> bool {
        self.summary.problems > 0
    }
}

/// Load a manifest; `.json` files are read as JSON, anything else as TOML.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let s = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str::<Manifest>(&s).map_err(|e| e.to_string())
    } else {
        toml::from_str::<Manifest>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| ManifestError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Audit every entry; with `fix`, also compute corrections.
pub fn run_audit(entries: &[AuditEntry], rulebook: &RuleBook, fix: bool) -> AuditReport {
    let engine = DescriptionRuleEngine::new(rulebook.clone());
    let corrector = DescriptionCorrector::new(rulebook.clone());

    let results: Vec<AuditResult> = entries
        .par_iter()
        .map(|entry| {
            let token = entry.desc.as_deref().map(DescriptionToken::quoted);
            let problems = engine.audit(entry.kind, &entry.name, token.as_ref());
            let correction = match (&token, fix && !problems.is_empty()) {
                (Some(tok), true) => corrector.correct(&entry.name, tok).map(|r| r.text),
                _ => None,
            };
            AuditResult {
                kind: entry.kind,
                name: entry.name.clone(),
                desc: entry.desc.clone(),
                problems,
                correction,
            }
        })
        .collect();

    let summary = AuditSummary {
        entries: results.len(),
        flagged: results.iter().filter(|r| !r.problems.is_empty()).count(),
        problems: results.iter().map(|r| r.problems.len()).sum(),
        corrected: results.iter().filter(|r| r.correction.is_some()).count(),
    };
    AuditReport { results, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc::RuleId;
    use tempfile::tempdir;

    fn entry(kind: ItemKind, name: &str, desc: Option<&str>) -> AuditEntry {
        AuditEntry {
            kind,
            name: name.into(),
            desc: desc.map(str::to_string),
        }
    }

    #[test]
    fn test_run_audit_keeps_order_and_counts() {
        let entries = vec![
            entry(ItemKind::Formula, "wget", Some("Internet file retriever")),
            entry(ItemKind::Cask, "foo", None),
            entry(ItemKind::Formula, "tool", Some("a Command line tool.")),
        ];
        let report = run_audit(&entries, &RuleBook::default(), true);
        let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["wget", "foo", "tool"]);
        assert!(report.results[0].problems.is_empty());
        assert_eq!(report.results[1].problems[0].rule, RuleId::Presence);
        assert_eq!(report.results[1].correction, None);
        assert_eq!(report.results[2].problems.len(), 4);
        assert_eq!(report.results[2].correction.as_deref(), Some("\"Command-line\""));
        assert_eq!(report.summary.entries, 3);
        assert_eq!(report.summary.flagged, 2);
        assert_eq!(report.summary.problems, 5);
        assert_eq!(report.summary.corrected, 1);
        assert!(report.has_problems());
    }

    #[test]
    fn test_run_audit_without_fix_skips_corrections() {
        let entries = vec![entry(ItemKind::Formula, "foo", Some("a tool."))];
        let report = run_audit(&entries, &RuleBook::default(), false);
        assert!(report.results[0].correction.is_none());
        assert_eq!(report.summary.corrected, 0);
    }

    #[test]
    fn test_load_manifest_toml_and_json() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("descs.toml");
        fs::write(
            &toml_path,
            r#"
[[entries]]
kind = "cask"
name = "firefox"
desc = "Web browser"

[[entries]]
name = "wget"
"#,
        )
        .unwrap();
        let m = load_manifest(&toml_path).unwrap();
        assert_eq!(m.entries.len(), 2);
        assert_eq!(m.entries[0].kind, ItemKind::Cask);
        assert_eq!(m.entries[1].kind, ItemKind::Formula);
        assert!(m.entries[1].desc.is_none());

        let json_path = dir.path().join("descs.json");
        fs::write(
            &json_path,
            r#"{"entries": [{"kind": "formula", "name": "jq", "desc": "Lightweight JSON processor"}]}"#,
        )
        .unwrap();
        let m = load_manifest(&json_path).unwrap();
        assert_eq!(m.entries[0].name, "jq");
    }

    #[test]
    fn test_load_manifest_errors() {
        let dir = tempdir().unwrap();
        let missing = load_manifest(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ManifestError::Read { .. }));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[[entries]]\nkind = \"keg\"\nname = \"x\"\n").unwrap();
        assert!(matches!(
            load_manifest(&bad).unwrap_err(),
            ManifestError::Parse { .. }
        ));
    }
}

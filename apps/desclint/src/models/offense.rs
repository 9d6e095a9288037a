//! Offenses reported by external linters, grouped per file.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// 1-based line/column plus the number of characters the diagnostic covers.
pub struct LineLocation {
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl LineLocation {
    pub fn new(line: usize, column: usize, length: usize) -> Self {
        Self {
            line,
            column,
            length,
        }
    }

    /// `<line>: col <column>`
    pub fn to_short_string(&self) -> String {
        format!("{}: col {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One diagnostic from an external linter run.
pub struct OffenseRecord {
    pub severity: String,
    pub message: String,
    pub rule_id: String,
    pub corrected: bool,
    pub correctable: bool,
    pub location: LineLocation,
}

impl OffenseRecord {
    /// Upper-cased first character of the severity, e.g. `C` for convention.
    pub fn severity_code(&self) -> String {
        self.severity
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Offenses keyed by absolute file path.
///
/// Files without offenses never have an entry; `lookup` answers them with
/// an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    files: BTreeMap<PathBuf, Vec<OffenseRecord>>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append offenses for `path`. Empty sequences are ignored.
    pub fn insert(&mut self, path: PathBuf, offenses: Vec<OffenseRecord>) {
        if offenses.is_empty() {
            return;
        }
        self.files.entry(path).or_default().extend(offenses);
    }

    /// Stored offenses for `path`, or an empty slice when the file is clean
    /// or unknown. The canonical form of the path is tried as a fallback.
    pub fn lookup(&self, path: &Path) -> &[OffenseRecord] {
        if let Some(v) = self.files.get(path) {
            return v;
        }
        std::fs::canonicalize(path)
            .ok()
            .and_then(|p| self.files.get(&p))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Combine two results; offenses for the same path are concatenated.
    pub fn merge(mut self, other: RunResult) -> RunResult {
        for (path, offenses) in other.files {
            self.insert(path, offenses);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[OffenseRecord])> {
        self.files
            .iter()
            .map(|(p, v)| (p.as_path(), v.as_slice()))
    }

    /// Number of files with at least one offense.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_offenses(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn corrected_offenses(&self) -> usize {
        self.files
            .values()
            .flatten()
            .filter(|o| o.corrected)
            .count()
    }
}

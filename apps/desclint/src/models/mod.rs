//! Shared data models for audit problems, linter offenses, and manifests.

pub mod manifest;
pub mod offense;

pub use offense::{LineLocation, OffenseRecord, RunResult};

use crate::desc::rulebook::RuleId;
use crate::desc::token::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The kind of item a description belongs to. Only affects message phrasing.
pub enum ItemKind {
    #[default]
    Formula,
    Cask,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Formula => "formula",
            ItemKind::Cask => "cask",
        }
    }

    /// Name with the first letter upper-cased, for sentence starts.
    pub fn capitalized(self) -> &'static str {
        match self {
            ItemKind::Formula => "Formula",
            ItemKind::Cask => "Cask",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a description problem. Every rule reports at convention level.
pub enum Severity {
    Convention,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Convention => "convention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single rule violation found in a description.
pub struct Problem {
    pub rule: RuleId,
    pub message: String,
    /// Offending substring, for rules that quote one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    pub severity: Severity,
    /// Source span of the description; absent when the description itself is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

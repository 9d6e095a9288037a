//! Audit manifest schema: a list of described items to check in one run.
//!
//! TOML form:
//!
//! ```toml
//! [[entries]]
//! kind = "formula"
//! name = "wget"
//! desc = "Internet file retriever"
//! ```
//!
//! JSON form uses the same shape (`{"entries": [...]}`). Omitting `desc`
//! audits an item with no description at all.

use super::ItemKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub entries: Vec<AuditEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditEntry {
    #[serde(default)]
    pub kind: ItemKind,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
}

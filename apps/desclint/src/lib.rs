//! Desclint core library.
//!
//! This crate exposes programmatic APIs for auditing and auto-correcting
//! package descriptions, and for running external style linters with a
//! single aggregated report.
//!
//! High-level modules:
//! - `desc`: Description rules, the rule engine, and the corrector.
//! - `audit`: Batch audits over a manifest of descriptions.
//! - `style`: External linter orchestration, payload aggregation, rule registry.
//! - `models`: Problems, offenses, run results, and manifest entries.
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Offense rendering and human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Error types for config, manifest, and style failures.
//! - `utils`: Terminal helpers.
pub mod audit;
pub mod cli;
pub mod config;
pub mod desc;
pub mod error;
pub mod models;
pub mod output;
pub mod style;
pub mod utils;

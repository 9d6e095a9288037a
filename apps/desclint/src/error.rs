//! Error types shared by the configuration, audit, and style layers.
//!
//! Rule violations and declined corrections are values, not errors; only
//! conditions that abort a run end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load `desclint.toml|yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config {path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config {path} is not valid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown rule id '{0}' in [desc].disable")]
    UnknownDescRule(String),
}

/// Failure to load an audit manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest {path} is invalid: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Errors that abort a style run.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Include/exclude filter named rules or departments the linter does not know.
    #[error("unknown rules or departments: {}", names.join(", "))]
    UnknownRules { names: Vec<String> },

    /// The rule registry needed to validate filters could not be read.
    #[error("failed to read rule registry from `{command}`: {reason}")]
    Registry { command: String, reason: String },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Exit code outside the expected range.
    #[error("`{command}` failed with {}{}", describe_code(*code), describe_stderr(stderr))]
    Execution {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Structured output too small or unparseable to be trusted.
    #[error("`{command}` produced an unusable report: {reason}{}", describe_stderr(stderr))]
    Payload {
        command: String,
        reason: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

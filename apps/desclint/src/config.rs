//! Configuration discovery and effective settings resolution.
//!
//! Desclint reads `desclint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `desc.max_length`: 80
//! - `desc.lowercase_words`: `iOS`, `iPhone`, `macOS`
//! - `style.*`: see `StyleSettings::for_repo`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::desc::rulebook::{DEFAULT_RULES, MAX_DESC_LENGTH, VALID_LOWERCASE_WORDS};
use crate::desc::{RuleBook, RuleId};
use crate::error::ConfigError;
use crate::style::StyleSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["desclint.toml", "desclint.yaml", "desclint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Description audit section under `[desc]`.
pub struct DescCfg {
    pub max_length: Option<usize>,
    pub lowercase_words: Option<Vec<String>>,
    #[serde(default)]
    pub disable: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// External linter section under `[style]`. Paths are relative to the repo root.
pub struct StyleCfg {
    pub linter: Option<String>,
    pub checker: Option<String>,
    pub root: Option<String>,
    pub config: Option<String>,
    pub spec_config: Option<String>,
    pub cache_dir: Option<String>,
    pub entry_point: Option<String>,
    pub shell_globs: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `desclint.toml|yaml`.
pub struct DesclintConfig {
    pub output: Option<String>,
    pub desc: Option<DescCfg>,
    pub style: Option<StyleCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub rulebook: RuleBook,
    pub style: StyleSettings,
    /// Whether a config file was found at `repo_root`.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `desclint.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DesclintConfig` from `desclint.toml` or `desclint.yaml|yml` if present.
///
/// A missing file is `Ok(None)`; an unreadable or invalid one is an error.
pub fn load_config(root: &Path) -> Result<Option<DesclintConfig>, ConfigError> {
    let Some(path) = CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.exists())
    else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let cfg = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).map_err(|source| ConfigError::Toml { path, source })?
    } else {
        serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml { path, source })?
    };
    Ok(Some(cfg))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let rulebook = build_rulebook(cfg.desc.unwrap_or_default())?;
    let style = build_style(&repo_root, cfg.style.unwrap_or_default());

    Ok(Effective {
        repo_root,
        output,
        rulebook,
        style,
        config_found,
    })
}

fn build_rulebook(desc: DescCfg) -> Result<RuleBook, ConfigError> {
    let disabled = desc
        .disable
        .iter()
        .map(|name| name.parse::<RuleId>().map_err(ConfigError::UnknownDescRule))
        .collect::<Result<Vec<_>, _>>()?;
    let words = desc.lowercase_words.unwrap_or_else(|| {
        VALID_LOWERCASE_WORDS.iter().map(|w| w.to_string()).collect()
    });
    let max_length = desc.max_length.unwrap_or(MAX_DESC_LENGTH);
    Ok(RuleBook::new(DEFAULT_RULES.to_vec(), words, max_length).without(&disabled))
}

fn build_style(repo_root: &Path, cfg: StyleCfg) -> StyleSettings {
    let defaults = StyleSettings::for_repo(repo_root);
    let under_root = |p: Option<String>, fallback: PathBuf| {
        p.map(|p| repo_root.join(p)).unwrap_or(fallback)
    };
    // Executables stay bare names (PATH lookup) unless they contain a separator.
    let executable = |p: String| {
        if p.contains('/') {
            repo_root.join(p)
        } else {
            PathBuf::from(p)
        }
    };
    StyleSettings {
        linter: cfg.linter.map(executable).unwrap_or(defaults.linter),
        checker: match cfg.checker {
            Some(c) if c.is_empty() => None,
            Some(c) => Some(executable(c)),
            None => defaults.checker,
        },
        root: under_root(cfg.root, defaults.root),
        config: under_root(cfg.config, defaults.config),
        spec_config: under_root(cfg.spec_config, defaults.spec_config),
        cache_dir: under_root(cfg.cache_dir, defaults.cache_dir),
        entry_point: under_root(cfg.entry_point, defaults.entry_point),
        shell_globs: cfg.shell_globs.unwrap_or(defaults.shell_globs),
        repo_root: defaults.repo_root,
        rules: cfg.rules.unwrap_or(defaults.rules),
    }
}

//! The description rulebook.
//!
//! Rules are plain records evaluated in order by the engine. A fatal rule
//! stops the audit right after it reports. Message templates may use these
//! placeholders:
//! - `{kind}` / `{Kind}`: item kind, lower-case or capitalized
//! - `{match}`: offending substring
//! - `{expected}`: suggested replacement
//! - `{length}` / `{max}`: current and maximum description length

use super::checks::{self, Check};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest description accepted without a length problem.
pub const MAX_DESC_LENGTH: usize = 80;

/// Words allowed to start a description in lower case.
pub const VALID_LOWERCASE_WORDS: [&str; 3] = ["iOS", "iPhone", "macOS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    Presence,
    NonEmpty,
    LeadingSpace,
    TrailingSpace,
    CommandLine,
    IndefiniteArticle,
    Capitalization,
    SelfReference,
    FullStop,
    MaxLength,
}

impl RuleId {
    pub const ALL: [RuleId; 10] = [
        RuleId::Presence,
        RuleId::NonEmpty,
        RuleId::LeadingSpace,
        RuleId::TrailingSpace,
        RuleId::CommandLine,
        RuleId::IndefiniteArticle,
        RuleId::Capitalization,
        RuleId::SelfReference,
        RuleId::FullStop,
        RuleId::MaxLength,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::Presence => "presence",
            RuleId::NonEmpty => "non-empty",
            RuleId::LeadingSpace => "leading-space",
            RuleId::TrailingSpace => "trailing-space",
            RuleId::CommandLine => "command-line",
            RuleId::IndefiniteArticle => "indefinite-article",
            RuleId::Capitalization => "capitalization",
            RuleId::SelfReference => "self-reference",
            RuleId::FullStop => "full-stop",
            RuleId::MaxLength => "max-length",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
/// One rule: its predicate, whether a hit ends the audit, and the message.
pub struct Rule {
    pub id: RuleId,
    pub fatal: bool,
    pub check: Check,
    pub template: &'static str,
}

impl Rule {
    pub const fn new(id: RuleId, fatal: bool, check: Check, template: &'static str) -> Self {
        Self {
            id,
            fatal,
            check,
            template,
        }
    }
}

/// Default rule order. Order is significant: reported problems follow it.
pub const DEFAULT_RULES: [Rule; 10] = [
    Rule::new(
        RuleId::Presence,
        true,
        checks::presence,
        "{Kind} should have a desc (Description).",
    ),
    Rule::new(
        RuleId::NonEmpty,
        true,
        checks::non_empty,
        "The desc (description) should not be an empty string.",
    ),
    Rule::new(
        RuleId::LeadingSpace,
        false,
        checks::leading_space,
        "Description shouldn't have a leading space.",
    ),
    Rule::new(
        RuleId::TrailingSpace,
        false,
        checks::trailing_space,
        "Description shouldn't have a trailing space.",
    ),
    Rule::new(
        RuleId::CommandLine,
        false,
        checks::command_line,
        "Description should use \"{expected}\" instead of \"{match}\".",
    ),
    Rule::new(
        RuleId::IndefiniteArticle,
        false,
        checks::indefinite_article,
        "Description shouldn't start with an indefinite article i.e. \"{match}\".",
    ),
    Rule::new(
        RuleId::Capitalization,
        false,
        checks::capitalization,
        "Description should start with a capital letter.",
    ),
    Rule::new(
        RuleId::SelfReference,
        false,
        checks::self_reference,
        "Description shouldn't start with the {kind} name.",
    ),
    Rule::new(
        RuleId::FullStop,
        false,
        checks::full_stop,
        "Description shouldn't end with a full stop.",
    ),
    Rule::new(
        RuleId::MaxLength,
        false,
        checks::max_length,
        "Description is too long. It should be less than {max} characters. The current length is {length}.",
    ),
];

/// Immutable rule set handed to the engine and corrector at construction.
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<Rule>,
    lowercase_words: Vec<String>,
    max_length: usize,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
            lowercase_words: VALID_LOWERCASE_WORDS.iter().map(|w| w.to_string()).collect(),
            max_length: MAX_DESC_LENGTH,
        }
    }
}

impl RuleBook {
    /// Rulebook with custom rules, allow-list, and length limit.
    pub fn new(rules: Vec<Rule>, lowercase_words: Vec<String>, max_length: usize) -> Self {
        Self {
            rules,
            lowercase_words,
            max_length,
        }
    }

    /// Drop the listed rules, keeping the order of the rest.
    pub fn without(mut self, disabled: &[RuleId]) -> Self {
        self.rules.retain(|r| !disabled.contains(&r.id));
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// True when `word` may start a description in lower case (exact match).
    pub fn allows_lowercase(&self, word: &str) -> bool {
        self.lowercase_words.iter().any(|w| w == word)
    }

    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }
}

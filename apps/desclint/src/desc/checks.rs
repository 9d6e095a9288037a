//! Predicates behind the default rules.
//!
//! Each check looks at one description and returns a `Finding` when its rule
//! fires. Checks other than `presence` never fire on a missing description.

use super::matcher;
use super::rulebook::RuleBook;
use super::token::DescriptionToken;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+").expect("valid leading space regex"));
static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+$").expect("valid trailing space regex"));
static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(command ?line)").expect("valid command line regex"));
// Group 1 is the article; the trailing \s stands in for a lookahead.
static INDEFINITE_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(an?)\s").expect("valid article regex"));
static LOWERCASE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]").expect("valid lowercase regex"));

/// What one description under audit offers to a check.
pub struct CheckInput<'a> {
    pub name: &'a str,
    /// `None` when the item has no description at all.
    pub token: Option<&'a DescriptionToken>,
    pub rulebook: &'a RuleBook,
}

/// What a rule hit carries into its message template.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Finding {
    pub matched: Option<String>,
    pub expected: Option<String>,
    pub length: Option<usize>,
}

impl Finding {
    pub fn matched(text: &str) -> Self {
        Self {
            matched: Some(text.to_string()),
            ..Self::default()
        }
    }
}

pub type Check = fn(&CheckInput<'_>) -> Option<Finding>;

pub fn presence(input: &CheckInput<'_>) -> Option<Finding> {
    input.token.is_none().then(Finding::default)
}

pub fn non_empty(input: &CheckInput<'_>) -> Option<Finding> {
    input.token?.content().is_empty().then(Finding::default)
}

pub fn leading_space(input: &CheckInput<'_>) -> Option<Finding> {
    matcher::match_group(input.token?.source(), &LEADING_SPACE).map(Finding::matched)
}

pub fn trailing_space(input: &CheckInput<'_>) -> Option<Finding> {
    matcher::match_group(input.token?.source(), &TRAILING_SPACE).map(Finding::matched)
}

/// Suggests the hyphenated spelling, keeping the case of the leading `c`.
pub fn command_line(input: &CheckInput<'_>) -> Option<Finding> {
    matcher::match_group(input.token?.source(), &COMMAND_LINE).map(|found| {
        let first: String = found.chars().take(1).collect();
        Finding {
            expected: Some(format!("{}ommand-line", first)),
            ..Finding::matched(found)
        }
    })
}

pub fn indefinite_article(input: &CheckInput<'_>) -> Option<Finding> {
    matcher::capture_group(input.token?.source(), &INDEFINITE_ARTICLE, 1).map(Finding::matched)
}

pub fn capitalization(input: &CheckInput<'_>) -> Option<Finding> {
    let token = input.token?;
    let first_word = token.content().split_whitespace().next().unwrap_or("");
    (!input.rulebook.allows_lowercase(first_word)
        && matcher::is_match(token.source(), &LOWERCASE_START))
    .then(Finding::default)
}

/// Item name at the very start, followed by a space, any case.
pub fn self_reference(input: &CheckInput<'_>) -> Option<Finding> {
    let token = input.token?;
    if input.name.is_empty() {
        return None;
    }
    let pattern = Regex::new(&format!("(?i)^{} ", regex::escape(input.name))).ok()?;
    pattern
        .find(token.content())
        .map(|m| Finding::matched(m.as_str().trim_end()))
}

pub fn full_stop(input: &CheckInput<'_>) -> Option<Finding> {
    let content = input.token?.content();
    (content.ends_with('.') && !content.ends_with("etc.")).then(Finding::default)
}

pub fn max_length(input: &CheckInput<'_>) -> Option<Finding> {
    let length = input.token?.content().chars().count();
    (length > input.rulebook.max_length()).then(|| Finding {
        length: Some(length),
        ..Finding::default()
    })
}

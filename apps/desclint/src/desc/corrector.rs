//! Auto-correction of description tokens.
//!
//! The rewrite is an ordered list of pure string steps. One pass applies
//! them all; passes repeat until the text stops changing, so correcting an
//! already-corrected token is a no-op. A step tied to a rule runs only while
//! the rulebook carries that rule. Over-long descriptions are never
//! shortened.

use super::engine::DescriptionRuleEngine;
use super::rulebook::{RuleBook, RuleId};
use super::token::{DescriptionToken, TokenReplacement};
use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(["'])(.*)(["'])$"#).expect("valid quoted token regex"));
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^an?\s+").expect("valid article regex"));
static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(c)ommand ?line").expect("valid command line regex"));

/// Inputs shared by every step of one correction.
pub struct StepContext<'a> {
    pub name: &'a str,
    pub rulebook: &'a RuleBook,
}

pub type Step = fn(&str, &StepContext<'_>) -> String;

/// Steps in application order, each with the rule it repairs.
pub const STEPS: [(&str, Option<RuleId>, Step); 7] = [
    ("strip-whitespace", None, strip_whitespace),
    ("strip-article", Some(RuleId::IndefiniteArticle), strip_article),
    ("capitalize", Some(RuleId::Capitalization), capitalize_first_word),
    (
        "hyphenate-command-line",
        Some(RuleId::CommandLine),
        hyphenate_command_line,
    ),
    ("remove-name", Some(RuleId::SelfReference), remove_name),
    ("strip-whitespace", None, strip_whitespace),
    ("strip-full-stop", Some(RuleId::FullStop), strip_full_stop),
];

#[derive(Debug, Clone, Default)]
pub struct DescriptionCorrector {
    engine: DescriptionRuleEngine,
}

impl DescriptionCorrector {
    pub fn new(rulebook: RuleBook) -> Self {
        Self {
            engine: DescriptionRuleEngine::new(rulebook),
        }
    }

    /// Replacement for `token`, or `None` when the token already passes the
    /// rulebook, uses an unsupported quoting style, or would come out
    /// unchanged or empty.
    pub fn correct(&self, name: &str, token: &DescriptionToken) -> Option<TokenReplacement> {
        let (quote, literal) = split_quoted(token.source())?;
        if self.engine.passes(name, token) {
            return None;
        }
        let corrected = self.rewrite(name, literal);
        if corrected == literal || corrected.trim().is_empty() {
            return None;
        }
        Some(TokenReplacement {
            span: token.span(),
            text: format!("{}{}{}", quote, corrected, quote),
        })
    }

    /// Apply the step pipeline to a bare literal until it is stable.
    pub fn rewrite(&self, name: &str, literal: &str) -> String {
        let ctx = StepContext {
            name,
            rulebook: self.engine.rulebook(),
        };
        let mut current = literal.to_string();
        // Every pass that changes the text shortens it or fixes case and
        // hyphenation once, so char count + 2 passes always reach the fixpoint.
        for _ in 0..literal.chars().count() + 2 {
            let next = STEPS
                .iter()
                .filter(|(_, rule, _)| rule.is_none_or(|id| ctx.rulebook.contains(id)))
                .fold(current.clone(), |text, (_, _, step)| step(&text, &ctx));
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

/// Quote character and inner literal of a single-line `"..."` or `'...'` token.
fn split_quoted(source: &str) -> Option<(&str, &str)> {
    let caps = QUOTED.captures(source)?;
    let open = caps.get(1)?.as_str();
    let close = caps.get(3)?.as_str();
    if open != close {
        return None;
    }
    Some((open, caps.get(2)?.as_str()))
}

pub fn strip_whitespace(text: &str, _: &StepContext<'_>) -> String {
    text.trim().to_string()
}

pub fn strip_article(text: &str, _: &StepContext<'_>) -> String {
    LEADING_ARTICLE.replace(text, "").into_owned()
}

pub fn capitalize_first_word(text: &str, ctx: &StepContext<'_>) -> String {
    let Some(first_word) = text.split_whitespace().next() else {
        return text.to_string();
    };
    if ctx.rulebook.allows_lowercase(first_word) {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn hyphenate_command_line(text: &str, _: &StepContext<'_>) -> String {
    COMMAND_LINE.replace_all(text, "${1}ommand-line").into_owned()
}

/// Drop the item name wherever it stands as a word of its own.
pub fn remove_name(text: &str, ctx: &StepContext<'_>) -> String {
    if ctx.name.is_empty() {
        return text.to_string();
    }
    let pattern = format!(r"(?i)(^|[^a-z]){}([^a-z]|$)", regex::escape(ctx.name));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, "${1}${2}").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Strip one trailing full stop, keeping a closing "etc.".
pub fn strip_full_stop(text: &str, _: &StepContext<'_>) -> String {
    if text.ends_with("etc.") {
        return text.to_string();
    }
    text.strip_suffix('.').unwrap_or(text).to_string()
}

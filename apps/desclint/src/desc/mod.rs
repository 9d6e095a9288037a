//! Description style checks and auto-correction.
//!
//! - `matcher`: literal content extraction and regex predicates on quoted tokens.
//! - `token`: the quoted description under test and its replacement.
//! - `checks`: the predicate behind each default rule.
//! - `rulebook`: ordered rule records plus the allow-list and length limit.
//! - `engine`: evaluates the rulebook against one description.
//! - `corrector`: rewrites a description token so it passes the rulebook.

pub mod checks;
pub mod corrector;
pub mod engine;
pub mod matcher;
pub mod rulebook;
pub mod token;

pub use corrector::DescriptionCorrector;
pub use engine::DescriptionRuleEngine;
pub use rulebook::{RuleBook, RuleId};
pub use token::{DescriptionToken, Span, TokenReplacement};

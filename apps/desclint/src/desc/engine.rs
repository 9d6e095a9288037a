//! Rulebook interpreter for a single description.
//!
//! Every rule's check is evaluated in order; each hit becomes a
//! `Problem`. A fatal rule (missing or empty description) ends the audit
//! as soon as it reports, so nothing else fires on a disqualified token.

use super::checks::{CheckInput, Finding};
use super::rulebook::RuleBook;
use super::token::DescriptionToken;
use crate::models::{ItemKind, Problem, Severity};

#[derive(Debug, Clone, Default)]
pub struct DescriptionRuleEngine {
    rulebook: RuleBook,
}

impl DescriptionRuleEngine {
    pub fn new(rulebook: RuleBook) -> Self {
        Self { rulebook }
    }

    pub fn rulebook(&self) -> &RuleBook {
        &self.rulebook
    }

    /// Audit the description of the item `name`.
    ///
    /// `token` is `None` when the item has no description at all. Problems
    /// come back in rulebook order.
    pub fn audit(
        &self,
        kind: ItemKind,
        name: &str,
        token: Option<&DescriptionToken>,
    ) -> Vec<Problem> {
        let input = CheckInput {
            name,
            token,
            rulebook: &self.rulebook,
        };
        let mut problems = Vec::new();
        for rule in self.rulebook.rules() {
            let Some(finding) = (rule.check)(&input) else {
                continue;
            };
            problems.push(Problem {
                rule: rule.id,
                message: self.render_message(rule.template, kind, &finding),
                matched: finding.matched,
                severity: Severity::Convention,
                span: token.map(|t| t.span()),
            });
            if rule.fatal {
                break;
            }
        }
        problems
    }

    /// True when no rule fires on `token`.
    pub fn passes(&self, name: &str, token: &DescriptionToken) -> bool {
        let input = CheckInput {
            name,
            token: Some(token),
            rulebook: &self.rulebook,
        };
        self.rulebook
            .rules()
            .iter()
            .all(|rule| (rule.check)(&input).is_none())
    }

    fn render_message(&self, template: &str, kind: ItemKind, finding: &Finding) -> String {
        template
            .replace("{Kind}", kind.capitalized())
            .replace("{kind}", kind.as_str())
            .replace("{max}", &self.rulebook.max_length().to_string())
            .replace(
                "{length}",
                &finding.length.map(|l| l.to_string()).unwrap_or_default(),
            )
            .replace("{expected}", finding.expected.as_deref().unwrap_or(""))
            .replace("{match}", finding.matched.as_deref().unwrap_or(""))
    }
}

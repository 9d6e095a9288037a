//! Registry of rule names known to the primary linter.
//!
//! Used to validate `--only` / `--except` filters before the linter runs.
//! Names are `Department/Rule`; a department on its own is also a valid
//! filter.

use crate::error::StyleError;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRegistry {
    names: BTreeSet<String>,
    departments: BTreeSet<String>,
}

impl RuleRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let departments = names
            .iter()
            .filter_map(|n| n.rsplit_once('/').map(|(dept, _)| dept.to_string()))
            .collect();
        Self { names, departments }
    }

    /// Parse the YAML printed by `<linter> --show-cops`: every top-level key
    /// of the form `Department/Rule` is a registered rule.
    pub fn from_show_cops(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let names = doc
            .as_mapping()
            .map(|m| {
                m.keys()
                    .filter_map(|k| k.as_str())
                    .filter(|k| k.contains('/'))
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(Self::new(names))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || self.departments.contains(name)
    }

    /// Qualify a bare rule name with its department when exactly one
    /// registered rule carries it. Other names pass through unchanged.
    pub fn qualify(&self, name: &str) -> String {
        if name.contains('/') || self.departments.contains(name) {
            return name.to_string();
        }
        let suffix = format!("/{}", name);
        let mut hits = self.names.iter().filter(|n| n.ends_with(&suffix));
        match (hits.next(), hits.next()) {
            (Some(only), None) => only.clone(),
            _ => name.to_string(),
        }
    }

    /// Qualify every requested name; any unknown name is a configuration error.
    pub fn resolve(&self, requested: &[String]) -> Result<Vec<String>, StyleError> {
        let qualified: Vec<String> = requested
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(|n| self.qualify(n))
            .collect();
        let unknown: Vec<String> = qualified
            .iter()
            .filter(|n| !self.contains(n))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(StyleError::UnknownRules { names: unknown });
        }
        Ok(qualified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RuleRegistry {
        RuleRegistry::new([
            "FormulaAudit/Desc",
            "FormulaAudit/Homepage",
            "Cask/Desc",
            "Style/StringLiterals",
            "Layout/LineLength",
        ])
    }

    #[test]
    fn test_qualify_unique_short_name() {
        let reg = registry();
        assert_eq!(reg.qualify("StringLiterals"), "Style/StringLiterals");
        // ambiguous short names stay as given
        assert_eq!(reg.qualify("Desc"), "Desc");
        assert_eq!(reg.qualify("Layout"), "Layout");
    }

    #[test]
    fn test_resolve_accepts_rules_and_departments() {
        let reg = registry();
        let got = reg
            .resolve(&["LineLength".into(), "FormulaAudit".into(), "Cask/Desc".into()])
            .unwrap();
        assert_eq!(got, vec!["Layout/LineLength", "FormulaAudit", "Cask/Desc"]);
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let err = registry()
            .resolve(&["Style/StringLiterals".into(), "Bogus/Cop".into(), "Desc".into()])
            .unwrap_err();
        match err {
            StyleError::UnknownRules { names } => assert_eq!(names, vec!["Bogus/Cop", "Desc"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_show_cops_yaml() {
        let yaml = r#"
# Available cops (3) + config for /repo:
# Department 'Layout' (1):
Layout/LineLength:
  Description: Checks that line length does not exceed the configured limit.
  Enabled: true
  Max: 118

# Department 'Style' (2):
Style/StringLiterals:
  Enabled: true
Style/FrozenStringLiteralComment:
  Enabled: true
AllCops:
  TargetRubyVersion: 3.3
"#;
        let reg = RuleRegistry::from_show_cops(yaml).unwrap();
        assert!(reg.contains("Layout/LineLength"));
        assert!(reg.contains("Style"));
        assert!(!reg.contains("AllCops"));
        assert_eq!(reg.qualify("FrozenStringLiteralComment"), "Style/FrozenStringLiteralComment");
    }
}

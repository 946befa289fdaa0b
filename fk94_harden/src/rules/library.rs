//! Rule library container with load-time integrity validation.
//!
//! The library is read-only configuration: rules are validated once at
//! construction and never mutated afterwards. Library order is the
//! canonical ordering the selection pass preserves.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::config::compile_time::validation;

use super::builtin::builtin_rules;
use super::error::LibraryError;
use super::types::HardeningRule;

/// Ordered, immutable collection of hardening rules
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    rules: Vec<HardeningRule>,
}

/// On-disk document shape for TOML rule libraries
#[derive(Debug, Deserialize)]
struct LibraryDocument {
    #[serde(default)]
    rules: Vec<HardeningRule>,
}

impl RuleLibrary {
    /// Build a library from rules, rejecting integrity defects
    ///
    /// A rule that lists an OS without supplying a non-empty command
    /// body for it is rejected here rather than silently skipped at
    /// render time.
    pub fn new(rules: Vec<HardeningRule>) -> Result<Self, LibraryError> {
        if rules.len() > validation::MAX_LIBRARY_RULES {
            return Err(LibraryError::TooManyRules {
                count: rules.len(),
                max: validation::MAX_LIBRARY_RULES,
            });
        }

        let mut seen_ids = HashSet::new();
        for rule in &rules {
            validate_rule(rule)?;
            if !seen_ids.insert(rule.id.as_str()) {
                return Err(LibraryError::DuplicateRuleId {
                    rule_id: rule.id.clone(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// The canonical built-in library shipped with the product
    ///
    /// The built-in table satisfies the integrity invariants by
    /// construction; a test runs the full validation over it.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Parse a library from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, LibraryError> {
        let document: LibraryDocument = toml::from_str(content)?;
        Self::new(document.rules)
    }

    /// Load a library from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Rules in library order
    pub fn rules(&self) -> &[HardeningRule] {
        &self.rules
    }

    /// Iterate rules in library order
    pub fn iter(&self) -> impl Iterator<Item = &HardeningRule> {
        self.rules.iter()
    }

    /// Look up a rule by id
    pub fn get(&self, rule_id: &str) -> Option<&HardeningRule> {
        self.rules.iter().find(|r| r.id == rule_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Validate a single rule's structural integrity
fn validate_rule(rule: &HardeningRule) -> Result<(), LibraryError> {
    if rule.id.trim().is_empty() || rule.name.trim().is_empty() || rule.description.trim().is_empty()
    {
        return Err(LibraryError::EmptyMetadata {
            rule_id: rule.id.clone(),
        });
    }

    if rule.id.len() > validation::MAX_RULE_ID_LENGTH {
        return Err(LibraryError::RuleIdTooLong {
            rule_id: rule.id.clone(),
            max_length: validation::MAX_RULE_ID_LENGTH,
        });
    }

    if rule.os.is_empty() {
        return Err(LibraryError::EmptyOsSet {
            rule_id: rule.id.clone(),
        });
    }

    if rule.risk_levels.is_empty() {
        return Err(LibraryError::EmptyRiskSet {
            rule_id: rule.id.clone(),
        });
    }

    for os in &rule.os {
        if !rule.commands.has_command_for(*os) {
            return Err(LibraryError::MissingCommand {
                rule_id: rule.id.clone(),
                os: *os,
            });
        }
    }

    for condition in &rule.conditions {
        if condition.values.is_empty() {
            return Err(LibraryError::EmptyConditionValues {
                rule_id: rule.id.clone(),
                question_id: condition.question_id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::rules::types::{Os, RiskLevel};

    use super::*;

    fn minimal_rule(id: &str) -> HardeningRule {
        HardeningRule::new(id, "Name", "Description")
            .with_os(&[Os::Linux])
            .with_risk(&[RiskLevel::Basic])
            .with_linux_command("echo ok")
    }

    #[test]
    fn test_builtin_library_passes_integrity_validation() {
        // Run the full load-time validation over the built-in table
        let library = RuleLibrary::new(crate::rules::builtin::builtin_rules()).unwrap();
        assert_eq!(library.len(), 15);
        assert!(library.get("firewall").is_some());
        assert!(library.get("browser_reminder").is_some());
        assert!(library.get("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_rule_id_rejected() {
        let rules = vec![minimal_rule("fw"), minimal_rule("fw")];
        assert_matches!(
            RuleLibrary::new(rules),
            Err(LibraryError::DuplicateRuleId { rule_id }) if rule_id == "fw"
        );
    }

    #[test]
    fn test_missing_command_body_rejected() {
        let rule = HardeningRule::new("fw", "Firewall", "Block inbound")
            .with_os(&[Os::Linux, Os::Windows])
            .with_risk(&[RiskLevel::Basic])
            .with_linux_command("echo ok");
        assert_matches!(
            RuleLibrary::new(vec![rule]),
            Err(LibraryError::MissingCommand { os: Os::Windows, .. })
        );
    }

    #[test]
    fn test_whitespace_command_body_counts_as_missing() {
        let rule = HardeningRule::new("fw", "Firewall", "Block inbound")
            .with_os(&[Os::Linux])
            .with_risk(&[RiskLevel::Basic])
            .with_linux_command("   \n  ");
        assert_matches!(
            RuleLibrary::new(vec![rule]),
            Err(LibraryError::MissingCommand { os: Os::Linux, .. })
        );
    }

    #[test]
    fn test_empty_scope_sets_rejected() {
        let no_os = HardeningRule::new("a", "A", "a").with_risk(&[RiskLevel::Basic]);
        assert_matches!(
            RuleLibrary::new(vec![no_os]),
            Err(LibraryError::EmptyOsSet { .. })
        );

        let no_risk = HardeningRule::new("b", "B", "b")
            .with_os(&[Os::Linux])
            .with_linux_command("echo ok");
        assert_matches!(
            RuleLibrary::new(vec![no_risk]),
            Err(LibraryError::EmptyRiskSet { .. })
        );
    }

    #[test]
    fn test_empty_condition_values_rejected() {
        let rule = minimal_rule("fw").with_condition("has_crypto", &[]);
        assert_matches!(
            RuleLibrary::new(vec![rule]),
            Err(LibraryError::EmptyConditionValues { .. })
        );
    }

    #[test]
    fn test_from_toml_str() {
        let toml_doc = r#"
[[rules]]
id = "firewall"
name = "Enable Firewall"
description = "Block unauthorized incoming connections"
os = ["linux"]
risk_levels = ["basic", "medium", "maximum"]

[rules.commands]
linux = """
sudo ufw enable
echo "done"
"""

[[rules]]
id = "clipboard"
name = "Clear Clipboard"
description = "Prevent clipboard snooping"
os = ["macos"]
risk_levels = ["maximum"]

[[rules.conditions]]
question_id = "has_crypto"
values = ["yes"]

[rules.commands]
macos = "pbcopy < /dev/null"
"#;

        let library = RuleLibrary::from_toml_str(toml_doc).unwrap();
        assert_eq!(library.len(), 2);

        let firewall = library.get("firewall").unwrap();
        assert_eq!(firewall.os, vec![Os::Linux]);
        assert_eq!(firewall.risk_levels.len(), 3);
        assert!(firewall.commands.has_command_for(Os::Linux));

        let clipboard = library.get("clipboard").unwrap();
        assert_eq!(clipboard.conditions.len(), 1);
        assert_eq!(clipboard.conditions[0].question_id, "has_crypto");
    }

    #[test]
    fn test_from_toml_str_rejects_integrity_defects() {
        // Rule scoped to windows with no windows body
        let toml_doc = r#"
[[rules]]
id = "broken"
name = "Broken"
description = "Missing body"
os = ["windows"]
risk_levels = ["basic"]

[rules.commands]
macos = "echo wrong os"
"#;
        assert_matches!(
            RuleLibrary::from_toml_str(toml_doc),
            Err(LibraryError::MissingCommand { os: Os::Windows, .. })
        );
    }

    #[test]
    fn test_from_toml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[rules]]
id = "fw"
name = "Firewall"
description = "Block inbound"
os = ["linux"]
risk_levels = ["basic"]

[rules.commands]
linux = "sudo ufw enable"
"#
        )
        .unwrap();

        let library = RuleLibrary::from_toml_file(file.path()).unwrap();
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_from_toml_file_missing_path() {
        assert_matches!(
            RuleLibrary::from_toml_file("/nonexistent/rules.toml"),
            Err(LibraryError::Io(_))
        );
    }
}

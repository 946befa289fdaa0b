//! Rule library errors.

use super::types::Os;

/// Unrecognized operating system value
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized operating system '{0}' (expected macos, windows or linux)")]
pub struct ParseOsError(pub String);

/// Unrecognized risk level value
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized risk level '{0}' (expected basic, medium or maximum)")]
pub struct ParseRiskLevelError(pub String);

/// Load-time integrity errors for a rule library
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("duplicate rule id '{rule_id}'")]
    DuplicateRuleId { rule_id: String },

    #[error("rule '{rule_id}' has an empty id, name or description")]
    EmptyMetadata { rule_id: String },

    #[error("rule id '{rule_id}' exceeds maximum length of {max_length}")]
    RuleIdTooLong { rule_id: String, max_length: usize },

    #[error("rule '{rule_id}' targets no operating system")]
    EmptyOsSet { rule_id: String },

    #[error("rule '{rule_id}' targets no risk level")]
    EmptyRiskSet { rule_id: String },

    #[error("rule '{rule_id}' targets {os} but has no command body for it")]
    MissingCommand { rule_id: String, os: Os },

    #[error("rule '{rule_id}' has a condition on '{question_id}' with no acceptable values")]
    EmptyConditionValues {
        rule_id: String,
        question_id: String,
    },

    #[error("library holds {count} rules, exceeding the maximum of {max}")]
    TooManyRules { count: usize, max: usize },

    #[error("failed to read rule library file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rule library TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Selection errors — the InvalidAnswers taxonomy.

/// Invalid or incomplete answers for rule selection
///
/// Only `os` and `risk_level` are hard requirements. The flow state
/// machine enforces one valid answer per question before generation,
/// so these are primarily a defensive and test-time contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("required answer '{field}' is missing")]
    MissingAnswer { field: String },

    #[error("answer '{field}' holds unrecognized value '{value}'")]
    InvalidValue { field: String, value: String },
}

impl SelectionError {
    pub fn missing(field: &str) -> Self {
        Self::MissingAnswer {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

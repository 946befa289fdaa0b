//! Generated script artifact type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{Os, RiskLevel};

/// A fully rendered hardening script plus its metadata
///
/// `content` is the complete script text; the remaining fields record
/// the inputs and shape of the generation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScript {
    /// Complete script text, ready to write to disk
    pub content: String,
    /// Suggested filename, extension matched to the target OS
    pub filename: String,
    /// Target operating system
    pub os: Os,
    /// Risk level the script was generated for
    pub risk_level: RiskLevel,
    /// Generation timestamp embedded in the script header
    pub generated_at: DateTime<Utc>,
    /// Number of rules rendered into the script body
    pub rule_count: usize,
}

impl GeneratedScript {
    /// Script size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

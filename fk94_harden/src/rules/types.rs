//! Core data model for hardening rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ParseOsError, ParseRiskLevelError};

/// Target operating system for a hardening rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    MacOs,
    Windows,
    Linux,
}

impl Os {
    /// All supported operating systems, in canonical order
    pub const ALL: [Os; 3] = [Os::MacOs, Os::Windows, Os::Linux];

    /// Canonical lowercase answer value for this OS
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::MacOs => "macos",
            Os::Windows => "windows",
            Os::Linux => "linux",
        }
    }

    /// Human-readable product name
    pub fn label(&self) -> &'static str {
        match self {
            Os::MacOs => "macOS",
            Os::Windows => "Windows",
            Os::Linux => "Linux",
        }
    }

    /// Whether scripts for this OS run under a POSIX shell
    pub fn is_unix_shell(&self) -> bool {
        matches!(self, Os::MacOs | Os::Linux)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Os {
    type Err = ParseOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macos" => Ok(Os::MacOs),
            "windows" => Ok(Os::Windows),
            "linux" => Ok(Os::Linux),
            other => Err(ParseOsError(other.to_string())),
        }
    }
}

/// Self-reported threat-tolerance tier driving rule aggressiveness
///
/// Ordering exists for display and debugging only. Rule selection uses
/// exact set membership, never ordering: a `maximum` answer does not
/// imply rules scoped to `basic` or `medium`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Basic,
    Medium,
    Maximum,
}

impl RiskLevel {
    /// All risk levels, lowest to highest
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Basic, RiskLevel::Medium, RiskLevel::Maximum];

    /// Canonical lowercase answer value for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Basic => "basic",
            RiskLevel::Medium => "medium",
            RiskLevel::Maximum => "maximum",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(RiskLevel::Basic),
            "medium" => Ok(RiskLevel::Medium),
            "maximum" => Ok(RiskLevel::Maximum),
            other => Err(ParseRiskLevelError(other.to_string())),
        }
    }
}

/// Extra applicability predicate on a questionnaire answer
///
/// The rule applies only when the answer recorded for `question_id`
/// is one of `values`. Multiple conditions on a rule are conjunctive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub question_id: String,
    pub values: Vec<String>,
}

impl Condition {
    pub fn new(question_id: &str, values: &[&str]) -> Self {
        Self {
            question_id: question_id.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Check this condition against an answered value (None = unanswered)
    pub fn is_satisfied_by(&self, answer: Option<&str>) -> bool {
        match answer {
            Some(value) => self.values.iter().any(|v| v == value),
            None => false,
        }
    }
}

/// Per-OS command bodies for a rule, in each OS's native shell syntax
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
}

impl CommandSet {
    /// Get the command body for an OS, treating empty text as absent
    pub fn get(&self, os: Os) -> Option<&str> {
        let body = match os {
            Os::MacOs => self.macos.as_deref(),
            Os::Windows => self.windows.as_deref(),
            Os::Linux => self.linux.as_deref(),
        };
        body.filter(|b| !b.trim().is_empty())
    }

    /// Whether a non-empty body exists for the given OS
    pub fn has_command_for(&self, os: Os) -> bool {
        self.get(os).is_some()
    }
}

/// One atomic, independently applicable system-configuration change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardeningRule {
    /// Unique, stable identifier (used for ordering and debugging)
    pub id: String,

    /// Short name rendered as the rule's first comment line
    pub name: String,

    /// One-line description rendered as the rule's second comment line
    pub description: String,

    /// Operating systems this rule targets (must be non-empty)
    pub os: Vec<Os>,

    /// Risk levels this rule targets (must be non-empty)
    pub risk_levels: Vec<RiskLevel>,

    /// Extra answer predicates; all must hold for the rule to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    /// Per-OS command bodies
    #[serde(default)]
    pub commands: CommandSet,
}

impl HardeningRule {
    /// Create a rule with empty scope; populate via the `with_` builders
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            os: Vec::new(),
            risk_levels: Vec::new(),
            conditions: Vec::new(),
            commands: CommandSet::default(),
        }
    }

    /// Set the target OS set
    pub fn with_os(mut self, os: &[Os]) -> Self {
        self.os = os.to_vec();
        self
    }

    /// Set the target risk-level set
    pub fn with_risk(mut self, levels: &[RiskLevel]) -> Self {
        self.risk_levels = levels.to_vec();
        self
    }

    /// Add an extra answer condition
    pub fn with_condition(mut self, question_id: &str, values: &[&str]) -> Self {
        self.conditions.push(Condition::new(question_id, values));
        self
    }

    /// Set the macOS command body
    pub fn with_mac_command(mut self, command: &str) -> Self {
        self.commands.macos = Some(command.to_string());
        self
    }

    /// Set the Windows (PowerShell) command body
    pub fn with_windows_command(mut self, command: &str) -> Self {
        self.commands.windows = Some(command.to_string());
        self
    }

    /// Set the Linux command body
    pub fn with_linux_command(mut self, command: &str) -> Self {
        self.commands.linux = Some(command.to_string());
        self
    }

    /// Whether this rule targets the given OS
    pub fn targets_os(&self, os: Os) -> bool {
        self.os.contains(&os)
    }

    /// Whether this rule targets the given risk level
    pub fn targets_risk(&self, level: RiskLevel) -> bool {
        self.risk_levels.contains(&level)
    }

    /// Applicable to an OS: in scope AND has a non-empty body for it
    pub fn applicable_to_os(&self, os: Os) -> bool {
        self.targets_os(os) && self.commands.has_command_for(os)
    }
}

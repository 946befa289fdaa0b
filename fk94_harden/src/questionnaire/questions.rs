//! Questionnaire definition.

use serde::{Deserialize, Serialize};

/// One selectable option of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable machine value recorded as the answer
    pub value: String,
    /// Human-readable label
    pub label: String,
}

impl QuestionOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A single questionnaire question with an ordered option set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn new(id: &str, prompt: &str, options: Vec<QuestionOption>) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options,
        }
    }

    /// Whether `value` is one of this question's option values
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Label for an option value, if the value is valid
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// Question id holding the target operating system
pub const QUESTION_OS: &str = "os";

/// Question id holding the risk level
pub const QUESTION_RISK_LEVEL: &str = "risk_level";

/// The canonical six-question sequence, in asking order
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            QUESTION_OS,
            "What operating system do you use?",
            vec![
                QuestionOption::new("macos", "macOS"),
                QuestionOption::new("windows", "Windows"),
                QuestionOption::new("linux", "Linux"),
            ],
        ),
        Question::new(
            QUESTION_RISK_LEVEL,
            "What level of security do you need?",
            vec![
                QuestionOption::new("basic", "Basic - Just the essentials"),
                QuestionOption::new("medium", "Medium - I handle sensitive data"),
                QuestionOption::new(
                    "maximum",
                    "Maximum - High risk profile (crypto, journalist, activist)",
                ),
            ],
        ),
        Question::new(
            "has_crypto",
            "Do you hold cryptocurrency?",
            vec![
                QuestionOption::new("yes", "Yes"),
                QuestionOption::new("no", "No"),
            ],
        ),
        Question::new(
            "uses_vpn",
            "Do you currently use a VPN?",
            vec![
                QuestionOption::new("yes", "Yes, always"),
                QuestionOption::new("sometimes", "Sometimes"),
                QuestionOption::new("no", "No"),
            ],
        ),
        Question::new(
            "public_figure",
            "Are you a public figure or handle sensitive information?",
            vec![
                QuestionOption::new("yes", "Yes"),
                QuestionOption::new("no", "No"),
            ],
        ),
        Question::new(
            "work_type",
            "What best describes your work?",
            vec![
                QuestionOption::new("general", "General / Office work"),
                QuestionOption::new("tech", "Tech / Developer"),
                QuestionOption::new("finance", "Finance / Trading"),
                QuestionOption::new("journalism", "Journalism / Activism"),
            ],
        ),
    ]
}

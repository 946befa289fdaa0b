//! Answer storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// String-keyed mapping from question id to the chosen option value
///
/// The set itself is deliberately dumb: membership validation against
/// a question's options happens in the flow, and enum validation for
/// `os` / `risk_level` happens in the selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous value for the question
    pub fn set(&mut self, question_id: &str, value: &str) {
        self.answers
            .insert(question_id.to_string(), value.to_string());
    }

    /// Answered value for a question, if any
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(|v| v.as_str())
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Remove all recorded answers
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Build from (question id, value) pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut set = Self::new();
        for (id, value) in pairs {
            set.set(id, value);
        }
        set
    }

    /// Iterate (question id, value) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

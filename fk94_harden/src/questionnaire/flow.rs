//! Questionnaire flow state machine.
//!
//! Models the answer/back/restart cycle as an explicit finite-state
//! machine rather than ad hoc flags, so the "answers persist across
//! back-navigation" and "no edit, only restart" rules are enforceable
//! independently of any UI.

use chrono::{DateTime, Utc};

use crate::pipeline;
use crate::render::GeneratedScript;
use crate::rules::RuleLibrary;

use super::answers::AnswerSet;
use super::error::FlowError;
use super::questions::Question;

/// Position in one generation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for an answer to the question at this index
    AwaitingAnswer(usize),
    /// All questions answered; generation pending. Transient, not
    /// user-interruptible; exists so callers can show progress before
    /// running the (instant) renderer.
    Generating,
    /// Script produced; only `restart` leads back
    Result,
}

/// Drives one questionnaire cycle over a fixed question sequence
#[derive(Debug, Clone)]
pub struct QuestionnaireFlow {
    questions: Vec<Question>,
    answers: AnswerSet,
    state: FlowState,
    script: Option<GeneratedScript>,
}

impl QuestionnaireFlow {
    /// Start a flow over the given question sequence
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: AnswerSet::new(),
            state: FlowState::AwaitingAnswer(0),
            script: None,
        }
    }

    /// Start a flow over the canonical six-question sequence
    pub fn with_default_questions() -> Self {
        Self::new(super::questions::default_questions())
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The generated script, present only in the `Result` state
    pub fn script(&self) -> Option<&GeneratedScript> {
        self.script.as_ref()
    }

    /// The question currently awaiting an answer, if any
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            FlowState::AwaitingAnswer(index) => self.questions.get(index),
            _ => None,
        }
    }

    /// (current question number, total questions) for progress display
    pub fn progress(&self) -> (usize, usize) {
        let position = match self.state {
            FlowState::AwaitingAnswer(index) => index + 1,
            _ => self.questions.len(),
        };
        (position, self.questions.len())
    }

    /// Answer the current question and advance
    ///
    /// The value must be one of the current question's option values.
    /// Answering the final question transitions to `Generating`.
    pub fn answer(&mut self, value: &str) -> Result<FlowState, FlowError> {
        let index = match self.state {
            FlowState::AwaitingAnswer(index) => index,
            _ => return Err(FlowError::NotAwaitingAnswer),
        };

        let question = match self.questions.get(index) {
            Some(question) => question,
            None => return Err(FlowError::NotAwaitingAnswer),
        };

        if !question.accepts(value) {
            return Err(FlowError::UnknownValue {
                question_id: question.id.clone(),
                value: value.to_string(),
            });
        }

        self.answers.set(&question.id, value);

        self.state = if index + 1 < self.questions.len() {
            FlowState::AwaitingAnswer(index + 1)
        } else {
            FlowState::Generating
        };
        Ok(self.state)
    }

    /// Go back one question; the recorded answers are retained
    pub fn back(&mut self) -> Result<FlowState, FlowError> {
        match self.state {
            FlowState::AwaitingAnswer(0) => Err(FlowError::AtFirstQuestion),
            FlowState::AwaitingAnswer(index) => {
                self.state = FlowState::AwaitingAnswer(index - 1);
                Ok(self.state)
            }
            _ => Err(FlowError::CannotGoBack),
        }
    }

    /// Run generation; only valid in the `Generating` state
    ///
    /// Transitions unconditionally to `Result` on success. Any
    /// artificial progress delay is the caller's concern.
    pub fn complete(
        &mut self,
        library: &RuleLibrary,
        now: DateTime<Utc>,
    ) -> Result<&GeneratedScript, FlowError> {
        if self.state != FlowState::Generating {
            return Err(FlowError::NotGenerating);
        }

        let script = pipeline::generate(library, &self.answers, now)?;
        self.state = FlowState::Result;
        Ok(self.script.insert(script))
    }

    /// Clear all answers and return to the first question
    ///
    /// Restart is the only way back from `Result`; there is no
    /// edit-answers transition.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.script = None;
        self.state = FlowState::AwaitingAnswer(0);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn answer_all(flow: &mut QuestionnaireFlow) {
        for value in ["linux", "basic", "no", "no", "no", "general"] {
            flow.answer(value).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let flow = QuestionnaireFlow::with_default_questions();
        assert_eq!(flow.state(), FlowState::AwaitingAnswer(0));
        assert_eq!(flow.current_question().unwrap().id, "os");
        assert_eq!(flow.progress(), (1, 6));
        assert!(flow.script().is_none());
    }

    #[test]
    fn test_answers_advance_to_generating() {
        let mut flow = QuestionnaireFlow::with_default_questions();
        answer_all(&mut flow);
        assert_eq!(flow.state(), FlowState::Generating);
        assert!(flow.current_question().is_none());
        assert_eq!(flow.answers().len(), 6);
    }

    #[test]
    fn test_invalid_option_rejected() {
        let mut flow = QuestionnaireFlow::with_default_questions();
        let err = flow.answer("beos").unwrap_err();
        assert_matches!(
            err,
            FlowError::UnknownValue { question_id, .. } if question_id == "os"
        );
        // Rejection does not advance or record
        assert_eq!(flow.state(), FlowState::AwaitingAnswer(0));
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn test_back_retains_answers() {
        let mut flow = QuestionnaireFlow::with_default_questions();
        flow.answer("macos").unwrap();
        flow.answer("medium").unwrap();
        assert_eq!(flow.state(), FlowState::AwaitingAnswer(2));

        flow.back().unwrap();
        assert_eq!(flow.state(), FlowState::AwaitingAnswer(1));
        assert_eq!(flow.answers().get("os"), Some("macos"));
        assert_eq!(flow.answers().get("risk_level"), Some("medium"));

        // Re-answering after back replaces the retained value
        flow.answer("maximum").unwrap();
        assert_eq!(flow.answers().get("risk_level"), Some("maximum"));
    }

    #[test]
    fn test_back_at_first_question_fails() {
        let mut flow = QuestionnaireFlow::with_default_questions();
        assert_matches!(flow.back(), Err(FlowError::AtFirstQuestion));
    }

    #[test]
    fn test_back_not_allowed_after_final_answer() {
        let mut flow = QuestionnaireFlow::with_default_questions();
        answer_all(&mut flow);
        assert_matches!(flow.back(), Err(FlowError::CannotGoBack));
    }

    #[test]
    fn test_complete_transitions_to_result() {
        let library = RuleLibrary::builtin();
        let mut flow = QuestionnaireFlow::with_default_questions();
        answer_all(&mut flow);

        let script = flow.complete(&library, timestamp()).unwrap();
        assert!(script.content.contains("FK94 Security"));
        assert_eq!(flow.state(), FlowState::Result);
        assert!(flow.script().is_some());
    }

    #[test]
    fn test_complete_requires_generating_state() {
        let library = RuleLibrary::builtin();
        let mut flow = QuestionnaireFlow::with_default_questions();
        assert_matches!(
            flow.complete(&library, timestamp()),
            Err(FlowError::NotGenerating)
        );
    }

    #[test]
    fn test_answer_rejected_in_result_state() {
        let library = RuleLibrary::builtin();
        let mut flow = QuestionnaireFlow::with_default_questions();
        answer_all(&mut flow);
        flow.complete(&library, timestamp()).unwrap();

        assert_matches!(flow.answer("linux"), Err(FlowError::NotAwaitingAnswer));
        assert_matches!(flow.back(), Err(FlowError::CannotGoBack));
    }

    #[test]
    fn test_restart_clears_everything() {
        let library = RuleLibrary::builtin();
        let mut flow = QuestionnaireFlow::with_default_questions();
        answer_all(&mut flow);
        flow.complete(&library, timestamp()).unwrap();

        flow.restart();
        assert_eq!(flow.state(), FlowState::AwaitingAnswer(0));
        assert!(flow.answers().is_empty());
        assert!(flow.script().is_none());
    }
}

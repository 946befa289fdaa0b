//! Questionnaire flow errors.

use crate::pipeline::GenerateError;

/// State-machine misuse and answer validation errors
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("'{value}' is not a valid option for question '{question_id}'")]
    UnknownValue { question_id: String, value: String },

    #[error("no question is awaiting an answer in the current state")]
    NotAwaitingAnswer,

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("cannot navigate back from the current state")]
    CannotGoBack,

    #[error("generation requested but the questionnaire is not complete")]
    NotGenerating,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

//! Questionnaire definition, answers and flow state machine.

pub mod answers;
pub mod error;
pub mod flow;
pub mod questions;

// Re-export main types
pub use answers::AnswerSet;
pub use error::FlowError;
pub use flow::{FlowState, QuestionnaireFlow};
pub use questions::{default_questions, Question, QuestionOption, QUESTION_OS, QUESTION_RISK_LEVEL};

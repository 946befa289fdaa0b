// Internal modules
pub mod config;
pub mod pipeline;
pub mod questionnaire;
pub mod render;
pub mod rules;
pub mod selection;
pub mod storage;

// Re-export key types for library consumers
pub use pipeline::{generate, GenerateError};
pub use questionnaire::{AnswerSet, FlowError, FlowState, QuestionnaireFlow};
pub use render::{render_script, script_filename, usage_instructions, GeneratedScript};
pub use rules::{HardeningRule, LibraryError, Os, RiskLevel, RuleLibrary};
pub use selection::{select_rules, SelectionError};

//! Generation pipeline errors.

use crate::selection::SelectionError;

/// Errors surfaced by end-to-end script generation
///
/// Rendering itself is infallible; everything that can fail happens
/// while interpreting the answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid answers: {0}")]
    Selection(#[from] SelectionError),
}

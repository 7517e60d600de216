use thiserror::Error;

/// Errors that fail a turn. Collaborator failures never surface here; the
/// reactor absorbs them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("intent distribution is empty")]
    EmptyDistribution,

    #[error("intent score at index {index} is not a finite number")]
    NonFiniteScore { index: usize },

    #[error("intent index {index} is outside the {known} known intents")]
    InvalidIntent { index: usize, known: usize },
}

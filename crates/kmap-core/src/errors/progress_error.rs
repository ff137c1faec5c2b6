//! Progress propagation and recommendation errors.

use super::error_code::{self, KmapErrorCode};

/// Errors raised by the progress engine and the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("unknown concept: {id}")]
    UnknownConcept { id: String },

    /// A goal id is tracked but absent from the map. This is a data-integrity
    /// bug in the caller, never a normal runtime condition.
    #[error("goal {id} is not present in the map")]
    MissingGoal { id: String },
}

impl KmapErrorCode for ProgressError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownConcept { .. } => error_code::PROGRESS_ERROR,
            Self::MissingGoal { .. } => error_code::MISSING_GOAL,
        }
    }
}

//! Editor command log errors.

use super::error_code::{self, KmapErrorCode};

/// Errors raised while applying, undoing, or redoing structural edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("{command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },
}

impl KmapErrorCode for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingToUndo => error_code::NOTHING_TO_UNDO,
            Self::NothingToRedo => error_code::NOTHING_TO_REDO,
            _ => error_code::EDITOR_ERROR,
        }
    }
}

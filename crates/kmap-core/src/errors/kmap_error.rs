//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::{self, KmapErrorCode};
use super::{ConfigError, EditorError, GraphError, ProgressError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum KmapError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("progress error: {0}")]
    Progress(#[from] ProgressError),

    #[error("editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type KmapResult<T> = Result<T, KmapError>;

impl KmapErrorCode for KmapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Progress(e) => e.error_code(),
            Self::Editor(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

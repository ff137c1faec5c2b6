//! Persistence collaborator errors.

use super::error_code::{self, KmapErrorCode};

/// Errors raised by progress stores and map repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },

    #[error("io error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl KmapErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}

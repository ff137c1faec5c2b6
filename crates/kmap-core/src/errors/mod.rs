//! Error handling for the knowledge map engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod editor_error;
pub mod error_code;
pub mod graph_error;
pub mod kmap_error;
pub mod progress_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use editor_error::EditorError;
pub use error_code::KmapErrorCode;
pub use graph_error::{EdgeRejection, GraphError};
pub use kmap_error::{KmapError, KmapResult};
pub use progress_error::ProgressError;
pub use storage_error::StorageError;

//! # kmap-storage
//!
//! Persistence collaborators behind the `IProgressStorage` and
//! `IMapRepository` seams. The HTTP progress client needs the `http`
//! feature.

pub mod endpoints;
pub mod file_repository;
#[cfg(feature = "http")]
pub mod http;
pub mod memory;

pub use file_repository::FileMapRepository;
#[cfg(feature = "http")]
pub use http::HttpProgressStore;
pub use memory::MemoryProgressStore;

use kmap_core::errors::StorageError;
use kmap_core::KmapError;

/// Wrap an I/O failure at `path`.
pub(crate) fn io_err(path: &std::path::Path, err: std::io::Error) -> KmapError {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

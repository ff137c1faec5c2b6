//! Seams to external collaborators: persistence and randomness.

pub mod map_repository;
pub mod progress_storage;
pub mod random_source;

pub use map_repository::IMapRepository;
pub use progress_storage::IProgressStorage;
pub use random_source::RandomSource;

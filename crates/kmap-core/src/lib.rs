//! # kmap-core
//!
//! Foundation crate for the knowledge map engine.
//! Defines the map data model, the map document format, errors, config,
//! session events, storage traits, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KmapConfig;
pub use errors::{KmapError, KmapResult};
pub use models::{ConceptNode, DependencyEdge, MapDocument, MapNode, NodeKind, Position, TopicNode};

//! Data model: concept and topic nodes, dependency edges, the map document
//! exchange format, and progress payloads.

pub mod document;
pub mod edge;
pub mod node;
pub mod progress;

pub use document::{EdgeElement, MapDocument, NodeElement};
pub use edge::DependencyEdge;
pub use node::{ConceptNode, MapNode, NodeKind, Position, TopicNode};
pub use progress::{parse_lenient, GoalPayload, LearnedPayload, ProgressKey, ProgressSnapshot};

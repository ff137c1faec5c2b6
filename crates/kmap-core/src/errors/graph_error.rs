//! Graph model errors.

use std::fmt;

use super::error_code::{self, KmapErrorCode};

/// Why the edge-creation validity predicate refused a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRejection {
    /// One endpoint is not in the graph.
    UnknownNode,
    /// Source and target are the same node.
    SelfLoop,
    /// An edge between the two nodes already exists.
    Duplicate,
    /// A topic cannot take part in a dependency edge.
    TopicEndpoint,
    /// The target is already a transitive predecessor of the source.
    WouldCreateCycle,
}

impl EdgeRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownNode => "unknown endpoint",
            Self::SelfLoop => "self loop",
            Self::Duplicate => "edge already exists",
            Self::TopicEndpoint => "topics cannot have dependencies",
            Self::WouldCreateCycle => "would create a cycle",
        }
    }
}

impl fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the graph model adapter and map document validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("unknown edge: {id}")]
    UnknownEdge { id: String },

    #[error("duplicate edge id: {id}")]
    DuplicateEdgeId { id: String },

    #[error("node {id} is not a concept")]
    NotAConcept { id: String },

    #[error("node {id} is not a topic")]
    NotATopic { id: String },

    #[error("concept {concept} references missing topic {parent}")]
    OrphanConcept { concept: String, parent: String },

    #[error("concept {id} has invalid relative importance {importance}")]
    InvalidImportance { id: String, importance: String },

    #[error("topic {id} has no concepts")]
    EmptyTopic { id: String },

    #[error("topic {id} still has {children} concepts")]
    TopicHasChildren { id: String, children: usize },

    #[error("cycle detected in dependency graph: {path}")]
    CycleDetected { path: String },

    #[error("edge {from} -> {to} rejected: {reason}")]
    EdgeRejected {
        from: String,
        to: String,
        reason: EdgeRejection,
    },
}

impl KmapErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } | Self::UnknownEdge { .. } => error_code::UNKNOWN_NODE,
            Self::CycleDetected { .. } => error_code::CYCLE_DETECTED,
            Self::EdgeRejected { .. } => error_code::EDGE_REJECTED,
            Self::InvalidImportance { .. } => error_code::INVALID_IMPORTANCE,
            _ => error_code::GRAPH_ERROR,
        }
    }
}

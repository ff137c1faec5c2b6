//! The map document: the JSON unit round-tripped on save and load.

use serde::{Deserialize, Serialize};

use super::{DependencyEdge, MapNode, Position};
use crate::errors::KmapResult;

/// One node entry: `{ data: {...}, position: {x, y} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    pub data: MapNode,
    #[serde(
        default,
        alias = "renderedPosition",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Position>,
}

/// One edge entry: `{ data: {id, source, target} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeElement {
    pub data: DependencyEdge,
}

/// `{ nodes: [...], edges: [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub nodes: Vec<NodeElement>,
    #[serde(default)]
    pub edges: Vec<EdgeElement>,
}

impl MapDocument {
    /// Parse a map document from JSON text.
    pub fn from_json(json: &str) -> KmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> KmapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of concept nodes.
    pub fn concept_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.data.is_concept()).count()
    }

    /// Number of topic nodes.
    pub fn topic_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.data.is_topic()).count()
    }
}

//! petgraph::StableGraph wrapper holding concept and topic nodes.
//!
//! Topics live in the graph as plain nodes so lookups are uniform, but they
//! never carry dependency edges; the concept → topic grouping is the
//! concept's `parent` field.

use std::collections::HashMap;

use kmap_core::errors::GraphError;
use kmap_core::models::{ConceptNode, DependencyEdge, MapNode, Position, TopicNode};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use super::dag_enforcement;
use crate::collection::NodeSet;

/// A node in the map graph: its data plus author-specified position.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub data: MapNode,
    pub position: Option<Position>,
}

/// A node taken out of the graph together with the edges that went with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedNode {
    pub node: GraphNode,
    pub edges: Vec<DependencyEdge>,
}

/// The underlying directed graph type.
pub type MapStableGraph = StableGraph<GraphNode, DependencyEdge, Directed>;

/// Indexed knowledge map graph.
#[derive(Debug, Clone, Default)]
pub struct MapGraph {
    pub(crate) graph: MapStableGraph,
    node_index: HashMap<String, NodeIndex>,
    edge_index: HashMap<String, EdgeIndex>,
}

impl MapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Nodes ---

    /// Insert a node. A concept's parent must already be a topic in the graph
    /// and its relative importance must be finite and positive.
    pub fn add_node(
        &mut self,
        data: MapNode,
        position: Option<Position>,
    ) -> Result<NodeIndex, GraphError> {
        if self.node_index.contains_key(data.id()) {
            return Err(GraphError::DuplicateNode {
                id: data.id().to_string(),
            });
        }
        if let MapNode::Concept(concept) = &data {
            let importance = concept.relative_importance;
            if !importance.is_finite() || importance <= 0.0 {
                return Err(GraphError::InvalidImportance {
                    id: concept.id.clone(),
                    importance: importance.to_string(),
                });
            }
            if self.topic(&concept.parent).is_none() {
                return Err(GraphError::OrphanConcept {
                    concept: concept.id.clone(),
                    parent: concept.parent.clone(),
                });
            }
        }
        let id = data.id().to_string();
        let idx = self.graph.add_node(GraphNode { data, position });
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Remove a node and all its edges. A topic can only be removed once it
    /// has no concepts left.
    pub fn remove_node(&mut self, id: &str) -> Result<RemovedNode, GraphError> {
        let idx = self.index_of(id)?;
        if self.topic(id).is_some() {
            let children = self.children(id).len();
            if children > 0 {
                return Err(GraphError::TopicHasChildren {
                    id: id.to_string(),
                    children,
                });
            }
        }

        let mut edges: Vec<DependencyEdge> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .chain(self.graph.edges_directed(idx, Direction::Outgoing))
            .map(|e| e.weight().clone())
            .collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        for edge in &edges {
            self.edge_index.remove(&edge.id);
        }

        self.node_index.remove(id);
        let node = self
            .graph
            .remove_node(idx)
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })?;
        Ok(RemovedNode { node, edges })
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn concept(&self, id: &str) -> Option<&ConceptNode> {
        self.node(id).and_then(|n| n.data.as_concept())
    }

    pub fn topic(&self, id: &str) -> Option<&TopicNode> {
        self.node(id).and_then(|n| n.data.as_topic())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn is_concept(&self, id: &str) -> bool {
        self.concept(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.node(id).and_then(|n| n.position)
    }

    /// Move a node on the canvas. Returns the previous position.
    pub fn set_position(
        &mut self,
        id: &str,
        position: Option<Position>,
    ) -> Result<Option<Position>, GraphError> {
        let idx = self.index_of(id)?;
        let node = self
            .graph
            .node_weight_mut(idx)
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })?;
        Ok(std::mem::replace(&mut node.position, position))
    }

    /// Reparent a concept under another topic. Returns the previous parent.
    pub fn set_parent(&mut self, concept_id: &str, parent: &str) -> Result<String, GraphError> {
        if self.topic(parent).is_none() {
            return Err(GraphError::NotATopic {
                id: parent.to_string(),
            });
        }
        let idx = self.index_of(concept_id)?;
        let concept = self
            .graph
            .node_weight_mut(idx)
            .and_then(|n| n.data.as_concept_mut())
            .ok_or_else(|| GraphError::NotAConcept {
                id: concept_id.to_string(),
            })?;
        Ok(std::mem::replace(&mut concept.parent, parent.to_string()))
    }

    /// Parent topic id of a concept.
    pub fn parent(&self, concept_id: &str) -> Option<&str> {
        self.concept(concept_id).map(|c| c.parent.as_str())
    }

    /// Concepts grouped under a topic.
    pub fn children(&self, topic_id: &str) -> NodeSet {
        self.graph
            .node_weights()
            .filter_map(|n| n.data.as_concept())
            .filter(|c| c.parent == topic_id)
            .map(|c| c.id.clone())
            .collect()
    }

    // --- Edges ---

    /// Insert a dependency edge after running the validity predicate.
    pub fn add_edge(&mut self, edge: DependencyEdge) -> Result<EdgeIndex, GraphError> {
        if self.edge_index.contains_key(&edge.id) {
            return Err(GraphError::DuplicateEdgeId { id: edge.id });
        }
        dag_enforcement::validate_edge(self, &edge.source, &edge.target).map_err(|reason| {
            GraphError::EdgeRejected {
                from: edge.source.clone(),
                to: edge.target.clone(),
                reason,
            }
        })?;
        let source = self.index_of(&edge.source)?;
        let target = self.index_of(&edge.target)?;
        let id = edge.id.clone();
        let idx = self.graph.add_edge(source, target, edge);
        self.edge_index.insert(id, idx);
        Ok(idx)
    }

    pub fn remove_edge(&mut self, id: &str) -> Result<DependencyEdge, GraphError> {
        let idx = self
            .edge_index
            .remove(id)
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })?;
        self.graph
            .remove_edge(idx)
            .ok_or_else(|| GraphError::UnknownEdge { id: id.to_string() })
    }

    pub fn edge(&self, id: &str) -> Option<&DependencyEdge> {
        self.edge_index
            .get(id)
            .and_then(|&idx| self.graph.edge_weight(idx))
    }

    /// The edge `source -> target`, if any.
    pub fn find_edge(&self, source: &str, target: &str) -> Option<&DependencyEdge> {
        let s = self.node_index.get(source)?;
        let t = self.node_index.get(target)?;
        self.graph
            .find_edge(*s, *t)
            .and_then(|idx| self.graph.edge_weight(idx))
    }

    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> + '_ {
        self.graph.edge_weights()
    }

    /// Edges with `node_id` as either endpoint.
    pub fn connected_edges(&self, node_id: &str) -> Vec<&DependencyEdge> {
        let Some(&idx) = self.node_index.get(node_id) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .chain(self.graph.edges_directed(idx, Direction::Outgoing))
            .map(|e| e.weight())
            .collect()
    }

    // --- Whole-graph queries ---

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_weights()
    }

    pub fn node_ids(&self) -> NodeSet {
        self.node_index.keys().map(String::as_str).collect()
    }

    pub fn concept_ids(&self) -> NodeSet {
        self.graph
            .node_weights()
            .filter_map(|n| n.data.as_concept())
            .map(|c| c.id.as_str())
            .collect()
    }

    pub fn topic_ids(&self) -> NodeSet {
        self.graph
            .node_weights()
            .filter_map(|n| n.data.as_topic())
            .map(|t| t.id.as_str())
            .collect()
    }

    /// Nodes whose data satisfies `predicate`.
    pub fn nodes_where<F>(&self, mut predicate: F) -> NodeSet
    where
        F: FnMut(&MapNode) -> bool,
    {
        self.graph
            .node_weights()
            .filter(|n| predicate(&n.data))
            .map(|n| n.data.id())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // --- Index helpers ---

    pub(crate) fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }

    pub(crate) fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.data.id())
    }
}

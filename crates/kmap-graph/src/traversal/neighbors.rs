//! Direct neighbours and the hover/focus neighbourhood.

use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::collection::NodeSet;
use crate::graph::MapGraph;

/// A node, its direct neighbours, and the edges joining them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub nodes: NodeSet,
    pub edges: NodeSet,
}

impl Neighborhood {
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }
}

impl MapGraph {
    /// Direct prerequisites of `id`.
    pub fn incomers(&self, id: &str) -> NodeSet {
        self.direct(id, Direction::Incoming)
    }

    /// Concepts that directly depend on `id`.
    pub fn outgoers(&self, id: &str) -> NodeSet {
        self.direct(id, Direction::Outgoing)
    }

    /// Union of `outgoers` over every id in `ids`.
    pub fn outgoers_of(&self, ids: &NodeSet) -> NodeSet {
        let mut result = NodeSet::new();
        for id in ids.iter() {
            result.extend(self.outgoers(id));
        }
        result
    }

    /// `id` plus its direct neighbours and connecting edges. Empty for an
    /// unknown id.
    pub fn neighborhood(&self, id: &str) -> Neighborhood {
        let Some(idx) = self.get_index(id) else {
            return Neighborhood::default();
        };
        let mut hood = Neighborhood::default();
        hood.nodes.insert(id);
        for direction in [Direction::Incoming, Direction::Outgoing] {
            for edge in self.graph.edges_directed(idx, direction) {
                hood.edges.insert(edge.weight().id.clone());
                let other = if direction == Direction::Incoming {
                    edge.source()
                } else {
                    edge.target()
                };
                if let Some(other_id) = self.id_at(other) {
                    hood.nodes.insert(other_id);
                }
            }
        }
        hood
    }

    fn direct(&self, id: &str, direction: Direction) -> NodeSet {
        let Some(idx) = self.get_index(id) else {
            return NodeSet::new();
        };
        self.graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.id_at(n))
            .collect()
    }
}

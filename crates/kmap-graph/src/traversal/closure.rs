//! Transitive predecessors and successors.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::NodeIndexable;
use petgraph::Direction;

use crate::collection::NodeSet;
use crate::graph::MapGraph;

impl MapGraph {
    /// Every node that can reach `id` along dependency edges (its
    /// prerequisites, transitively). Excludes `id` itself.
    pub fn predecessors(&self, id: &str) -> NodeSet {
        self.closure(std::iter::once(id), Direction::Incoming)
    }

    /// Every node reachable from `id`. Excludes `id` itself.
    pub fn successors(&self, id: &str) -> NodeSet {
        self.closure(std::iter::once(id), Direction::Outgoing)
    }

    /// Union of `predecessors` over every id in `ids`. Members of `ids` are
    /// only included when they are a predecessor of another member.
    pub fn predecessors_of(&self, ids: &NodeSet) -> NodeSet {
        self.closure(ids.iter(), Direction::Incoming)
    }

    /// Union of `successors` over every id in `ids`.
    pub fn successors_of(&self, ids: &NodeSet) -> NodeSet {
        self.closure(ids.iter(), Direction::Outgoing)
    }

    fn closure<'a>(&self, starts: impl Iterator<Item = &'a str>, direction: Direction) -> NodeSet {
        let mut seen: Vec<bool> = vec![false; self.graph.node_bound()];
        let mut stack: Vec<NodeIndex> = Vec::new();
        for start in starts {
            if let Some(idx) = self.get_index(start) {
                stack.push(idx);
            }
        }

        let mut result = NodeSet::new();
        while let Some(current) = stack.pop() {
            for next in self.graph.neighbors_directed(current, direction) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    if let Some(id) = self.id_at(next) {
                        result.insert(id);
                    }
                    stack.push(next);
                }
            }
        }
        result
    }
}

//! Roots of a node collection.

use crate::collection::NodeSet;
use crate::graph::MapGraph;

impl MapGraph {
    /// Members of `set` with no direct predecessor inside `set`. Ids not in
    /// the graph are skipped.
    ///
    /// For an upward-closed set (e.g. the predecessors of a goal) these are
    /// exactly the graph roots the set contains.
    pub fn roots(&self, set: &NodeSet) -> NodeSet {
        set.filter(|id| {
            self.contains(id) && !self.incomers(id).iter().any(|p| set.contains(p))
        })
    }

    /// Concepts with no prerequisites at all.
    pub fn global_roots(&self) -> NodeSet {
        self.concept_ids().filter(|id| self.incomers(id).is_empty())
    }
}

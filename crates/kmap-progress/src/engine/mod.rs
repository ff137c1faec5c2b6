//! Progress propagation: the operations that mutate learned, goal and path
//! state while keeping them consistent with the graph.
//!
//! Invariants after every operation:
//! - learning a concept marks all of its predecessors learned;
//! - `path` equals the union of predecessors of every goal, minus goals;
//! - an edge is in `learned_edges` iff both its endpoints are learned.

mod goals;
mod learned;
mod lifecycle;
mod outcome;

use kmap_core::errors::ProgressError;
use kmap_graph::MapGraph;

pub use outcome::{GoalOutcome, InitOutcome, LearnedOutcome, ResetOutcome};

/// Applies progress mutations against a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct PropagationEngine<'g> {
    graph: &'g MapGraph,
}

impl<'g> PropagationEngine<'g> {
    pub fn new(graph: &'g MapGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g MapGraph {
        self.graph
    }

    fn require_concept(&self, id: &str) -> Result<(), ProgressError> {
        if self.graph.is_concept(id) {
            Ok(())
        } else {
            Err(ProgressError::UnknownConcept { id: id.to_string() })
        }
    }
}

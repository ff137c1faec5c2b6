//! Next-concept recommendation: the ready-to-learn frontier of the goal
//! and path subgraph, with an injectable random tie-break.

mod frontier;
mod random;

pub use random::{FirstCandidate, SeededRandom};

use kmap_core::errors::ProgressError;
use kmap_core::traits::RandomSource;
use kmap_graph::MapGraph;

use crate::state::ProgressState;

/// Recommends concepts to study next over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'g> {
    graph: &'g MapGraph,
}

impl<'g> Recommender<'g> {
    pub fn new(graph: &'g MapGraph) -> Self {
        Self { graph }
    }

    /// Pick one frontier concept uniformly at random.
    ///
    /// `Ok(None)` when every goal is learned, or no goal is set. A goal
    /// that is not a concept of the graph is an error.
    pub fn next_node_to_learn(
        &self,
        state: &ProgressState,
        newly_learned: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<String>, ProgressError> {
        let _span = kmap_core::recommendation_span!(state.goal_set().len()).entered();
        let candidates = self.frontier(state, newly_learned)?;
        if candidates.is_empty() {
            return Ok(None);
        }
        let index = rng.pick_index(candidates.len()).min(candidates.len() - 1);
        let pick = candidates.nth(index).map(str::to_string);
        tracing::debug!(candidates = candidates.len(), pick = ?pick, "recommended next concept");
        Ok(pick)
    }

    /// Up to `limit` distinct frontier concepts, chosen at random when the
    /// frontier is larger than `limit`. Returned in id order.
    pub fn recommend_batch(
        &self,
        state: &ProgressState,
        limit: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<String>, ProgressError> {
        let mut remaining = self.frontier(state, None)?.to_vec();
        if remaining.len() <= limit {
            return Ok(remaining);
        }
        let mut batch = Vec::with_capacity(limit);
        while batch.len() < limit {
            let index = rng.pick_index(remaining.len()).min(remaining.len() - 1);
            batch.push(remaining.swap_remove(index));
        }
        batch.sort();
        Ok(batch)
    }
}

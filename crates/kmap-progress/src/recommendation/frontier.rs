//! Frontier computation.

use kmap_core::errors::ProgressError;
use kmap_graph::NodeSet;

use super::Recommender;
use crate::state::ProgressState;

impl Recommender<'_> {
    /// The full set of concepts ready to learn toward the current goals.
    ///
    /// 1. No unlearned goal: empty.
    /// 2. Candidates are the direct successors of learned concepts plus the
    ///    roots of the unlearned goals' prerequisite subgraphs (goals
    ///    included), restricted to goal or path concepts, minus learned.
    /// 3. Keep candidates whose direct prerequisites are all learned.
    /// 4. If `newly_learned` is given and more than one candidate is its
    ///    direct successor, narrow to those.
    pub fn frontier(
        &self,
        state: &ProgressState,
        newly_learned: Option<&str>,
    ) -> Result<NodeSet, ProgressError> {
        let goals = state.goal_set();
        if let Some(missing) = goals.iter().find(|g| !self.graph.is_concept(g)) {
            return Err(ProgressError::MissingGoal {
                id: missing.to_string(),
            });
        }

        let learned = state.learned_set();
        let open_goals = goals.not(&learned);
        if open_goals.is_empty() {
            return Ok(NodeSet::new());
        }

        let goal_subgraph = self.graph.predecessors_of(&open_goals).or(&open_goals);
        let reachable = self
            .graph
            .outgoers_of(&learned)
            .or(&self.graph.roots(&goal_subgraph));
        let relevant = goals.or(&state.path_set());

        let candidates = reachable
            .and(&relevant)
            .not(&learned)
            .filter(|id| self.graph.incomers(id).is_subset(&learned));

        if let Some(newly) = newly_learned {
            let local = candidates.and(&self.graph.outgoers(newly));
            if local.len() > 1 {
                return Ok(local);
            }
        }
        Ok(candidates)
    }
}

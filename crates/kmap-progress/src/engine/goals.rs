//! Goal marking and path derivation.

use std::collections::BTreeMap;

use kmap_core::errors::ProgressError;
use kmap_graph::NodeSet;

use super::outcome::GoalOutcome;
use super::PropagationEngine;
use crate::state::ProgressState;

impl PropagationEngine<'_> {
    /// Mark `id` as a goal and tag its untracked predecessors as path.
    pub fn set_goal(
        &self,
        state: &mut ProgressState,
        id: &str,
    ) -> Result<GoalOutcome, ProgressError> {
        let _span = kmap_core::propagation_span!("set_goal", id).entered();
        self.require_concept(id)?;
        if state.is_goal(id) {
            return Ok(GoalOutcome {
                concept_id: id.to_string(),
                is_goal: true,
                ..Default::default()
            });
        }

        let before = state.path_set();
        state.goals.insert(id.to_string(), true);
        // A goal is never also path.
        state.path.remove(id);
        for ancestor in self.graph.predecessors(id).iter() {
            if !state.is_goal(ancestor) && !state.is_on_path(ancestor) {
                state.path.insert(ancestor.to_string(), true);
            }
        }

        let outcome = self.goal_outcome(state, id, true, &before);
        tracing::debug!(
            concept = %id,
            path = state.path.len(),
            "goal set"
        );
        Ok(outcome)
    }

    /// Clear `id` as a goal and re-derive the path for all remaining goals.
    /// Unsetting a concept that is not a goal is a no-op.
    pub fn unset_goal(
        &self,
        state: &mut ProgressState,
        id: &str,
    ) -> Result<GoalOutcome, ProgressError> {
        let _span = kmap_core::propagation_span!("unset_goal", id).entered();
        self.require_concept(id)?;
        if !state.is_goal(id) {
            return Ok(GoalOutcome {
                concept_id: id.to_string(),
                ..Default::default()
            });
        }

        let before = state.path_set();
        state.goals.remove(id);
        self.recompute_path(state);

        let outcome = self.goal_outcome(state, id, false, &before);
        tracing::debug!(
            concept = %id,
            path = state.path.len(),
            "goal unset"
        );
        Ok(outcome)
    }

    /// Derive `path` from scratch: predecessors of every goal, minus goals.
    pub(crate) fn recompute_path(&self, state: &mut ProgressState) {
        let goals = state.goal_set();
        let path: BTreeMap<String, bool> = self
            .graph
            .predecessors_of(&goals)
            .not(&goals)
            .into_iter()
            .map(|id| (id, true))
            .collect();
        state.path = path;
    }

    fn goal_outcome(
        &self,
        state: &ProgressState,
        id: &str,
        is_goal: bool,
        before: &NodeSet,
    ) -> GoalOutcome {
        let after = state.path_set();
        GoalOutcome {
            concept_id: id.to_string(),
            is_goal,
            changed: true,
            path_added: after.not(before).to_vec(),
            path_removed: before.not(&after).to_vec(),
        }
    }
}

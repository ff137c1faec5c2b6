//! Whole-state operations: reset, initialisation from storage, and pruning
//! after structural edits.

use kmap_core::errors::ProgressError;
use kmap_core::models::ProgressSnapshot;

use super::outcome::{InitOutcome, ResetOutcome};
use super::PropagationEngine;
use crate::state::ProgressState;

impl PropagationEngine<'_> {
    /// Unset every goal, unlearn everything and clear all mappings.
    pub fn reset_progress(&self, state: &mut ProgressState) -> ResetOutcome {
        let cleared_goals = state.goal_set().len();
        let cleared_learned = state.learned_set().len();

        for goal in state.goal_set().iter() {
            // Goals in the store are always concepts of this graph, but a
            // stale one must not stop the reset.
            if let Err(err) = self.unset_goal(state, goal) {
                tracing::debug!(%err, "dropping stale goal during reset");
            }
        }
        state.clear();

        tracing::info!(cleared_learned, cleared_goals, "progress reset");
        ResetOutcome {
            cleared_learned,
            cleared_goals,
        }
    }

    /// Replace `state` with mappings loaded from storage.
    ///
    /// Learned ids are applied one by one without upward closure, since the
    /// saved mapping already reflects local un-learns. Goals are re-applied
    /// so the path is derived fresh. Ids that are no longer concepts in the
    /// graph are dropped and reported in `pruned`.
    pub fn initialise_graph_state(
        &self,
        state: &mut ProgressState,
        snapshot: &ProgressSnapshot,
    ) -> InitOutcome {
        state.clear();
        let mut outcome = InitOutcome::default();

        for (id, &learned) in &snapshot.learned {
            if !self.graph.is_concept(id) {
                outcome.pruned.push(id.clone());
            } else if learned {
                state.learned.insert(id.clone(), true);
                outcome.learned += 1;
            }
        }

        for (id, &goal) in &snapshot.goals {
            if !goal {
                continue;
            }
            match self.set_goal(state, id) {
                Ok(_) => outcome.goals += 1,
                Err(ProgressError::UnknownConcept { .. }) => outcome.pruned.push(id.clone()),
                Err(err) => tracing::warn!(%err, goal = %id, "failed to restore goal"),
            }
        }
        outcome.pruned.sort();
        outcome.pruned.dedup();

        self.recompute_learned_edges(state);

        if !outcome.pruned.is_empty() {
            tracing::warn!(
                pruned = outcome.pruned.len(),
                ids = ?outcome.pruned,
                "dropped progress for concepts no longer in the map"
            );
        }
        outcome
    }

    /// Ids referenced by `state` that are no longer concepts of the graph.
    pub fn stale_ids(&self, state: &ProgressState) -> Vec<String> {
        let mut stale: Vec<String> = state
            .learned
            .keys()
            .chain(state.goals.keys())
            .chain(state.path.keys())
            .filter(|id| !self.graph.is_concept(id))
            .cloned()
            .collect();
        stale.sort();
        stale.dedup();
        stale
    }

    /// Drop `ids` from every mapping and re-derive path and learned edges
    /// against the current graph. Called after structural edits.
    pub fn prune_removed(&self, state: &mut ProgressState, ids: &[String]) {
        for id in ids {
            state.learned.remove(id);
            state.goals.remove(id);
            state.path.remove(id);
        }
        self.recompute_path(state);
        self.recompute_learned_edges(state);
        if !ids.is_empty() {
            tracing::debug!(removed = ids.len(), "pruned progress after edit");
        }
    }
}

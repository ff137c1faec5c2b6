//! Learned marking: eager upward closure on learn, local flip on unlearn.

use kmap_core::errors::ProgressError;
use kmap_graph::NodeSet;

use super::outcome::LearnedOutcome;
use super::PropagationEngine;
use crate::state::ProgressState;

impl PropagationEngine<'_> {
    /// Flip the learned status of a concept.
    ///
    /// Learning closes upward: every predecessor becomes learned too.
    /// Unlearning only affects `id`; its prerequisites stay learned.
    pub fn toggle_learned(
        &self,
        state: &mut ProgressState,
        id: &str,
    ) -> Result<LearnedOutcome, ProgressError> {
        let _span = kmap_core::propagation_span!("toggle_learned", id).entered();
        self.require_concept(id)?;

        let mut outcome = LearnedOutcome {
            concept_id: id.to_string(),
            ..Default::default()
        };

        if state.is_learned(id) {
            state.learned.remove(id);
            outcome.changed.push(id.to_string());
        } else {
            let mut closure = self.graph.predecessors(id);
            closure.insert(id);
            for concept in closure.iter() {
                if !state.is_learned(concept) {
                    state.learned.insert(concept.to_string(), true);
                    outcome.changed.push(concept.to_string());
                }
            }
            outcome.learned = true;
        }

        let touched: NodeSet = outcome.changed.iter().map(String::as_str).collect();
        let (learned, unlearned) = self.refresh_edges(state, &touched);
        outcome.edges_learned = learned;
        outcome.edges_unlearned = unlearned;

        tracing::debug!(
            concept = %id,
            learned = outcome.learned,
            changed = outcome.changed.len(),
            "toggled learned"
        );
        Ok(outcome)
    }

    /// Re-evaluate learned status for every edge touching `nodes`.
    /// Returns `(newly_learned, newly_unlearned)` edge ids.
    pub(crate) fn refresh_edges(
        &self,
        state: &mut ProgressState,
        nodes: &NodeSet,
    ) -> (Vec<String>, Vec<String>) {
        let mut learned = NodeSet::new();
        let mut unlearned = NodeSet::new();
        for node in nodes.iter() {
            for edge in self.graph.connected_edges(node) {
                let both = state.is_learned(&edge.source) && state.is_learned(&edge.target);
                if both && state.learned_edges.insert(edge.id.clone()) {
                    learned.insert(edge.id.clone());
                } else if !both && state.learned_edges.remove(&edge.id) {
                    unlearned.insert(edge.id.clone());
                }
            }
        }
        (learned.to_vec(), unlearned.to_vec())
    }

    /// Rebuild `learned_edges` from scratch against the current graph.
    pub(crate) fn recompute_learned_edges(&self, state: &mut ProgressState) {
        state.learned_edges = self
            .graph
            .edges()
            .filter(|e| state.is_learned(&e.source) && state.is_learned(&e.target))
            .map(|e| e.id.as_str())
            .collect();
    }
}

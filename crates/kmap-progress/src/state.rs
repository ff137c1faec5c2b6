//! The progress state store: learned, goal and path mappings plus the
//! derived set of learned edges.
//!
//! Mutation goes through [`crate::PropagationEngine`]; this type only
//! exposes reads and the crate-internal primitives the engine composes.

use std::collections::BTreeMap;

use kmap_core::models::ProgressSnapshot;
use kmap_graph::NodeSet;

/// Owned progress state for one learner on one map.
///
/// Absence from a mapping is the canonical "not set" state; the engine
/// never stores `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub(crate) learned: BTreeMap<String, bool>,
    pub(crate) goals: BTreeMap<String, bool>,
    pub(crate) path: BTreeMap<String, bool>,
    pub(crate) learned_edges: NodeSet,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.learned.get(id).copied().unwrap_or(false)
    }

    pub fn is_goal(&self, id: &str) -> bool {
        self.goals.get(id).copied().unwrap_or(false)
    }

    pub fn is_on_path(&self, id: &str) -> bool {
        self.path.get(id).copied().unwrap_or(false)
    }

    pub fn is_edge_learned(&self, edge_id: &str) -> bool {
        self.learned_edges.contains(edge_id)
    }

    /// The learned mapping exactly as it is persisted.
    pub fn learned_map(&self) -> &BTreeMap<String, bool> {
        &self.learned
    }

    /// The goal mapping exactly as it is persisted.
    pub fn goals_map(&self) -> &BTreeMap<String, bool> {
        &self.goals
    }

    pub fn path_map(&self) -> &BTreeMap<String, bool> {
        &self.path
    }

    pub fn learned_set(&self) -> NodeSet {
        truthy(&self.learned)
    }

    pub fn goal_set(&self) -> NodeSet {
        truthy(&self.goals)
    }

    pub fn path_set(&self) -> NodeSet {
        truthy(&self.path)
    }

    pub fn learned_edges(&self) -> &NodeSet {
        &self.learned_edges
    }

    /// True when nothing is learned and no goal is set.
    pub fn is_empty(&self) -> bool {
        self.learned.is_empty() && self.goals.is_empty() && self.path.is_empty()
    }

    /// Copy of the two persisted mappings.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            learned: self.learned.clone(),
            goals: self.goals.clone(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.learned.clear();
        self.goals.clear();
        self.path.clear();
        self.learned_edges = NodeSet::new();
    }
}

fn truthy(map: &BTreeMap<String, bool>) -> NodeSet {
    map.iter()
        .filter(|(_, &v)| v)
        .map(|(k, _)| k.as_str())
        .collect()
}

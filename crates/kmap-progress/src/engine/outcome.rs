//! Results of propagation operations. Each lists what changed so callers
//! can restyle selectively and persist the right mapping.

/// Result of `toggle_learned`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnedOutcome {
    pub concept_id: String,
    /// Whether the clicked concept is learned afterwards.
    pub learned: bool,
    /// Concepts whose learned flag changed, in id order.
    pub changed: Vec<String>,
    /// Edge ids that became learned.
    pub edges_learned: Vec<String>,
    /// Edge ids that stopped being learned.
    pub edges_unlearned: Vec<String>,
}

/// Result of `set_goal` / `unset_goal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalOutcome {
    pub concept_id: String,
    pub is_goal: bool,
    /// False when the call was a no-op (goal already set, or not a goal).
    pub changed: bool,
    pub path_added: Vec<String>,
    pub path_removed: Vec<String>,
}

/// Result of `reset_progress`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetOutcome {
    pub cleared_learned: usize,
    pub cleared_goals: usize,
}

/// Result of `initialise_graph_state`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOutcome {
    pub learned: usize,
    pub goals: usize,
    /// Ids present in the loaded mappings but no longer concepts in the map.
    pub pruned: Vec<String>,
}

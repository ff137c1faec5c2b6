//! Event payload types.

/// Which persisted mapping a save concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressKind {
    Learned,
    Goals,
}

impl ProgressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learned => "learned",
            Self::Goals => "goals",
        }
    }
}

/// Payload for `on_learned`.
#[derive(Debug, Clone)]
pub struct LearnedChangedEvent {
    pub concept_id: String,
    /// True when the concept became learned, false when it was un-learned.
    pub learned: bool,
    /// Every id whose learned flag changed, including `concept_id`.
    pub changed: Vec<String>,
}

/// Payload for `on_goal_changed`.
#[derive(Debug, Clone)]
pub struct GoalChangedEvent {
    pub concept_id: String,
    pub is_goal: bool,
    pub path_size: usize,
}

/// Payload for `on_progress_reset`.
#[derive(Debug, Clone)]
pub struct ProgressResetEvent {
    pub cleared_learned: usize,
    pub cleared_goals: usize,
}

/// Payload for `on_save_succeeded`.
#[derive(Debug, Clone)]
pub struct SaveSucceededEvent {
    pub key: String,
    pub kind: ProgressKind,
}

/// Payload for `on_save_failed`.
#[derive(Debug, Clone)]
pub struct SaveFailedEvent {
    pub key: String,
    pub kind: ProgressKind,
    pub message: String,
}

/// Payload for `on_graph_edited`.
#[derive(Debug, Clone)]
pub struct GraphEditedEvent {
    /// Short label of the command, e.g. `"add"` or `"undo"`.
    pub action: String,
    pub node_count: usize,
    pub edge_count: usize,
}

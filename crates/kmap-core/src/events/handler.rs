//! SessionEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Receives session events. Handlers only override what they care about;
/// the page controller uses these to drive transient notifications.
pub trait SessionEventHandler: Send + Sync {
    fn on_learned(&self, _event: &LearnedChangedEvent) {}
    fn on_goal_changed(&self, _event: &GoalChangedEvent) {}
    fn on_progress_reset(&self, _event: &ProgressResetEvent) {}
    fn on_save_succeeded(&self, _event: &SaveSucceededEvent) {}
    fn on_save_failed(&self, _event: &SaveFailedEvent) {}
    fn on_graph_edited(&self, _event: &GraphEditedEvent) {}
}

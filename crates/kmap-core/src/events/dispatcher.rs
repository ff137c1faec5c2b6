//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::SessionEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SessionEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn SessionEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("session event handler panicked");
            }
        }
    }

    pub fn emit_learned(&self, event: &LearnedChangedEvent) {
        self.emit(|h| h.on_learned(event));
    }

    pub fn emit_goal_changed(&self, event: &GoalChangedEvent) {
        self.emit(|h| h.on_goal_changed(event));
    }

    pub fn emit_progress_reset(&self, event: &ProgressResetEvent) {
        self.emit(|h| h.on_progress_reset(event));
    }

    pub fn emit_save_succeeded(&self, event: &SaveSucceededEvent) {
        self.emit(|h| h.on_save_succeeded(event));
    }

    pub fn emit_save_failed(&self, event: &SaveFailedEvent) {
        self.emit(|h| h.on_save_failed(event));
    }

    pub fn emit_graph_edited(&self, event: &GraphEditedEvent) {
        self.emit(|h| h.on_graph_edited(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

//! Session events: learner progress changes, save notifications, editor edits.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::SessionEventHandler;
pub use types::*;

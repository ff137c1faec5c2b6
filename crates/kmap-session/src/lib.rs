//! # kmap-session
//!
//! One [`MapSession`] per learner and map: it owns the graph, the progress
//! store, the editor and the persistence handle, and fans changes out to
//! registered event handlers. [`SessionManager`] keeps live sessions keyed
//! by `"{user}:{map}"`.

pub mod latch;
pub mod manager;
pub mod session;

pub use latch::{FocusGuard, FocusLatch};
pub use manager::SessionManager;
pub use session::MapSession;

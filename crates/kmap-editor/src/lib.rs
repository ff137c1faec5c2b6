//! # kmap-editor
//!
//! Author-side editing of a knowledge map. Every structural change is an
//! [`EditCommand`] that returns its own inverse when applied; the
//! [`CommandLog`] keeps those inverses for undo/redo. Pointer and keyboard
//! input is routed through a per-mode handler state machine.

pub mod command;
pub mod editor;
pub mod input;
pub mod keymap;
pub mod log;
pub mod mode;
pub mod plan;

pub use command::{EditCommand, Element, ElementId};
pub use editor::{EditOutcome, Editor};
pub use input::{EditorInput, Modifiers, TapTarget};
pub use keymap::Shortcut;
pub use log::{CommandLog, LogEntry};
pub use mode::EditorMode;

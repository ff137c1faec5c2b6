//! Editor mode state machine. Each mode owns the handler for the inputs it
//! understands; switching modes exits the old handler and enters the new.

mod add_edges;
mod add_node;
mod cursor;
mod delete;

use std::fmt;

use kmap_core::errors::EdgeRejection;
use kmap_graph::MapGraph;

use crate::command::EditCommand;
use crate::input::EditorInput;

pub use add_edges::AddEdgesMode;
pub use add_node::AddNodeMode;
pub use cursor::CursorMode;
pub use delete::DeleteMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    #[default]
    Cursor,
    AddNode,
    AddEdges,
    Delete,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::AddNode => "addNode",
            Self::AddEdges => "addEdges",
            Self::Delete => "delete",
        }
    }

    /// Fresh handler for this mode.
    pub fn handler(self) -> Box<dyn ModeHandler> {
        match self {
            Self::Cursor => Box::new(CursorMode),
            Self::AddNode => Box::new(AddNodeMode),
            Self::AddEdges => Box::new(AddEdgesMode::default()),
            Self::Delete => Box::new(DeleteMode),
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a handler wants the editor to do with an input.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeAction {
    /// The mode does not handle this input.
    Ignore,
    Select(Option<String>),
    Execute(EditCommand),
    /// First endpoint of an edge chosen; waiting for the second.
    PendingEdge(String),
    /// The drawn edge failed the validity predicate.
    RejectEdge(EdgeRejection),
}

/// Input handling for one editor mode.
pub trait ModeHandler: Send + Sync {
    fn mode(&self) -> EditorMode;

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn handle(&mut self, graph: &MapGraph, input: &EditorInput) -> ModeAction;
}

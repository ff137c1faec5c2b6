use kmap_graph::MapGraph;

use super::{EditorMode, ModeAction, ModeHandler};
use crate::command::EditCommand;
use crate::input::{EditorInput, TapTarget};

/// Select and drag.
#[derive(Debug, Default)]
pub struct CursorMode;

impl ModeHandler for CursorMode {
    fn mode(&self) -> EditorMode {
        EditorMode::Cursor
    }

    fn handle(&mut self, graph: &MapGraph, input: &EditorInput) -> ModeAction {
        match input {
            EditorInput::Tap { target, .. } => match target {
                TapTarget::Canvas => ModeAction::Select(None),
                TapTarget::Node(id) | TapTarget::Edge(id) => ModeAction::Select(Some(id.clone())),
            },
            EditorInput::DragFree { id, position } if graph.contains(id) => {
                if graph.position(id) == Some(*position) {
                    ModeAction::Ignore
                } else {
                    ModeAction::Execute(EditCommand::Reposition {
                        id: id.clone(),
                        position: Some(*position),
                    })
                }
            }
            _ => ModeAction::Ignore,
        }
    }
}

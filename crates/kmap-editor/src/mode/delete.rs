use kmap_graph::MapGraph;

use super::{EditorMode, ModeAction, ModeHandler};
use crate::input::{EditorInput, TapTarget};
use crate::plan;

/// Tap an element to remove it.
#[derive(Debug, Default)]
pub struct DeleteMode;

impl ModeHandler for DeleteMode {
    fn mode(&self) -> EditorMode {
        EditorMode::Delete
    }

    fn handle(&mut self, graph: &MapGraph, input: &EditorInput) -> ModeAction {
        let EditorInput::Tap { target, .. } = input else {
            return ModeAction::Ignore;
        };
        let (TapTarget::Node(id) | TapTarget::Edge(id)) = target else {
            return ModeAction::Ignore;
        };
        match plan::plan_remove(graph, id) {
            Ok(command) => ModeAction::Execute(command),
            Err(err) => {
                tracing::debug!(%err, "ignoring delete tap");
                ModeAction::Ignore
            }
        }
    }
}

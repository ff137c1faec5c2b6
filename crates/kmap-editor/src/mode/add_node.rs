use kmap_graph::MapGraph;

use super::{EditorMode, ModeAction, ModeHandler};
use crate::input::{EditorInput, TapTarget};
use crate::plan;

/// Tap to place a new concept.
#[derive(Debug, Default)]
pub struct AddNodeMode;

impl ModeHandler for AddNodeMode {
    fn mode(&self) -> EditorMode {
        EditorMode::AddNode
    }

    fn handle(&mut self, graph: &MapGraph, input: &EditorInput) -> ModeAction {
        match input {
            EditorInput::Tap {
                target: TapTarget::Canvas,
                position,
            } => ModeAction::Execute(plan::plan_add_concept(graph, None, *position)),
            EditorInput::Tap {
                target: TapTarget::Node(id),
                position,
            } => ModeAction::Execute(plan::plan_add_concept(graph, Some(id), *position)),
            _ => ModeAction::Ignore,
        }
    }
}

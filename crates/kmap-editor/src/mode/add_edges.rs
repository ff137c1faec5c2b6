use kmap_graph::MapGraph;

use super::{EditorMode, ModeAction, ModeHandler};
use crate::input::{EditorInput, TapTarget};
use crate::plan;

/// Tap a source concept, then a target concept, to draw a dependency.
#[derive(Debug, Default)]
pub struct AddEdgesMode {
    source: Option<String>,
}

impl AddEdgesMode {
    pub fn pending_source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl ModeHandler for AddEdgesMode {
    fn mode(&self) -> EditorMode {
        EditorMode::AddEdges
    }

    fn on_enter(&mut self) {
        self.source = None;
    }

    fn on_exit(&mut self) {
        self.source = None;
    }

    fn handle(&mut self, graph: &MapGraph, input: &EditorInput) -> ModeAction {
        let EditorInput::Tap { target, .. } = input else {
            return ModeAction::Ignore;
        };
        let TapTarget::Node(id) = target else {
            // Tapping away cancels a half-drawn edge.
            self.source = None;
            return ModeAction::Ignore;
        };

        match self.source.take() {
            None if graph.is_concept(id) => {
                self.source = Some(id.clone());
                ModeAction::PendingEdge(id.clone())
            }
            None => ModeAction::Ignore,
            Some(source) => match plan::plan_add_edge(graph, &source, id) {
                Ok(command) => ModeAction::Execute(command),
                Err(reason) => ModeAction::RejectEdge(reason),
            },
        }
    }
}

//! Editor: command log, active mode handler and current selection.

use kmap_core::config::EditorConfig;
use kmap_core::errors::EdgeRejection;
use kmap_core::KmapResult;
use kmap_graph::MapGraph;

use crate::command::EditCommand;
use crate::input::EditorInput;
use crate::keymap::Shortcut;
use crate::log::CommandLog;
use crate::mode::{EditorMode, ModeAction, ModeHandler};
use crate::plan;

/// What an input or operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Ignored,
    Selected(Option<String>),
    /// A command was applied; holds its label.
    Applied(&'static str),
    Undone(&'static str),
    Redone(&'static str),
    PendingEdge(String),
    Rejected(EdgeRejection),
}

impl EditOutcome {
    /// Whether the graph structure may have changed.
    pub fn changed_graph(&self) -> bool {
        matches!(self, Self::Applied(_) | Self::Undone(_) | Self::Redone(_))
    }
}

/// Per-map editing state.
pub struct Editor {
    log: CommandLog,
    handler: Box<dyn ModeHandler>,
    selection: Option<String>,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        let mut handler = EditorMode::Cursor.handler();
        handler.on_enter();
        Self {
            log: CommandLog::new(config.undo_limit),
            handler,
            selection: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.handler.mode()
    }

    /// Switch modes: exit the current handler, enter the new one.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode() {
            return;
        }
        self.handler.on_exit();
        let mut next = mode.handler();
        next.on_enter();
        tracing::debug!(from = %self.mode(), to = %mode, "editor mode changed");
        self.handler = next;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selection = id.map(str::to_string);
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Apply and record a command.
    pub fn execute(
        &mut self,
        graph: &mut MapGraph,
        command: EditCommand,
    ) -> KmapResult<EditOutcome> {
        let label = command.label();
        let _span = kmap_core::editor_span!(label).entered();
        self.log.do_command(graph, command)?;
        self.retain_selection(graph);
        tracing::debug!(
            command = label,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "applied edit"
        );
        Ok(EditOutcome::Applied(label))
    }

    pub fn undo(&mut self, graph: &mut MapGraph) -> KmapResult<EditOutcome> {
        let label = self.log.undo(graph)?.command.label();
        self.retain_selection(graph);
        Ok(EditOutcome::Undone(label))
    }

    pub fn redo(&mut self, graph: &mut MapGraph) -> KmapResult<EditOutcome> {
        let label = self.log.redo(graph)?.command.label();
        self.retain_selection(graph);
        Ok(EditOutcome::Redone(label))
    }

    /// Remove `id`, cascading through topic grouping.
    pub fn remove(&mut self, graph: &mut MapGraph, id: &str) -> KmapResult<EditOutcome> {
        let command = plan::plan_remove(graph, id)?;
        self.execute(graph, command)
    }

    /// Draw a dependency edge. A rejected edge is not an error: the draw
    /// simply does not complete.
    pub fn add_edge(
        &mut self,
        graph: &mut MapGraph,
        source: &str,
        target: &str,
    ) -> KmapResult<EditOutcome> {
        match plan::plan_add_edge(graph, source, target) {
            Ok(command) => self.execute(graph, command),
            Err(reason) => {
                tracing::debug!(%source, %target, %reason, "edge rejected");
                Ok(EditOutcome::Rejected(reason))
            }
        }
    }

    /// Reparent a concept.
    pub fn move_concept(
        &mut self,
        graph: &mut MapGraph,
        concept_id: &str,
        parent: &str,
    ) -> KmapResult<EditOutcome> {
        let command = plan::plan_move(graph, concept_id, parent)?;
        self.execute(graph, command)
    }

    /// Route an input: global shortcuts first, then the active mode.
    pub fn handle_input(
        &mut self,
        graph: &mut MapGraph,
        input: &EditorInput,
    ) -> KmapResult<EditOutcome> {
        if let EditorInput::KeyDown { key, modifiers } = input {
            return match Shortcut::from_key(key, *modifiers) {
                Some(Shortcut::Undo) => self.undo_if_possible(graph),
                Some(Shortcut::Redo) => self.redo_if_possible(graph),
                Some(Shortcut::RemoveSelection) => match self.selection.clone() {
                    Some(id) if graph.contains(&id) || graph.edge(&id).is_some() => {
                        self.remove(graph, &id)
                    }
                    _ => Ok(EditOutcome::Ignored),
                },
                None => Ok(EditOutcome::Ignored),
            };
        }

        match self.handler.handle(graph, input) {
            ModeAction::Ignore => Ok(EditOutcome::Ignored),
            ModeAction::Select(id) => {
                self.selection = id.clone();
                Ok(EditOutcome::Selected(id))
            }
            ModeAction::Execute(command) => self.execute(graph, command),
            ModeAction::PendingEdge(source) => Ok(EditOutcome::PendingEdge(source)),
            ModeAction::RejectEdge(reason) => Ok(EditOutcome::Rejected(reason)),
        }
    }

    fn undo_if_possible(&mut self, graph: &mut MapGraph) -> KmapResult<EditOutcome> {
        if self.log.can_undo() {
            self.undo(graph)
        } else {
            Ok(EditOutcome::Ignored)
        }
    }

    fn redo_if_possible(&mut self, graph: &mut MapGraph) -> KmapResult<EditOutcome> {
        if self.log.can_redo() {
            self.redo(graph)
        } else {
            Ok(EditOutcome::Ignored)
        }
    }

    fn retain_selection(&mut self, graph: &MapGraph) {
        if let Some(id) = &self.selection {
            if !graph.contains(id) && graph.edge(id).is_none() {
                self.selection = None;
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("mode", &self.mode())
            .field("selection", &self.selection)
            .field("undo", &self.log.undo_len())
            .field("redo", &self.log.redo_len())
            .finish()
    }
}


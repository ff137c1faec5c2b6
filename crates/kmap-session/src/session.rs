//! MapSession: one learner on one map.
//!
//! Learn-mode operations update the in-memory progress first and then save
//! the affected mapping. A failed save is logged and reported to event
//! handlers; the in-memory change stands.

use std::sync::Arc;

use kmap_core::events::{
    EventDispatcher, GoalChangedEvent, GraphEditedEvent, LearnedChangedEvent, ProgressKind,
    ProgressResetEvent, SaveFailedEvent, SaveSucceededEvent, SessionEventHandler,
};
use kmap_core::models::{MapDocument, ProgressKey, ProgressSnapshot};
use kmap_core::traits::{IProgressStorage, RandomSource};
use kmap_core::{KmapConfig, KmapResult};
use kmap_editor::{EditCommand, EditOutcome, Editor, EditorInput, EditorMode};
use kmap_graph::MapGraph;
use kmap_progress::{
    EdgeStyle, FocusContext, GoalOutcome, InitOutcome, LearnedOutcome, NodeStyle,
    ProgressState, PropagationEngine, Recommender, ResetOutcome, SeededRandom, StyleEngine,
};

use crate::latch::{FocusGuard, FocusLatch};

pub struct MapSession {
    key: ProgressKey,
    graph: MapGraph,
    progress: ProgressState,
    editor: Editor,
    storage: Option<Arc<dyn IProgressStorage>>,
    persistence_enabled: bool,
    rng: Box<dyn RandomSource>,
    batch_size: usize,
    focus: FocusContext,
    styles: StyleEngine,
    events: EventDispatcher,
    latch: FocusLatch,
}

impl MapSession {
    pub fn new(key: ProgressKey, graph: MapGraph, config: &KmapConfig) -> Self {
        Self {
            key,
            graph,
            progress: ProgressState::new(),
            editor: Editor::new(&config.editor),
            storage: None,
            persistence_enabled: config.persistence.enabled,
            rng: Box::new(SeededRandom::from_config(&config.recommendation)),
            batch_size: config.recommendation.batch_size,
            focus: FocusContext::new(),
            styles: StyleEngine::new(config.styling.clone()),
            events: EventDispatcher::new(),
            latch: FocusLatch::new(),
        }
    }

    /// Build the graph from an authored document.
    pub fn from_document(
        key: ProgressKey,
        document: &MapDocument,
        config: &KmapConfig,
    ) -> KmapResult<Self> {
        let graph = MapGraph::from_document(document)?;
        Ok(Self::new(key, graph, config))
    }

    pub fn with_storage(mut self, storage: Arc<dyn IProgressStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn register_handler(&mut self, handler: Arc<dyn SessionEventHandler>) {
        self.events.register(handler);
    }

    pub fn key(&self) -> &ProgressKey {
        &self.key
    }

    pub fn graph(&self) -> &MapGraph {
        &self.graph
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn focus(&self) -> &FocusContext {
        &self.focus
    }

    pub fn latch(&self) -> &FocusLatch {
        &self.latch
    }

    pub fn to_document(&self) -> MapDocument {
        self.graph.to_document()
    }

    // --- Learn mode ---

    /// Replace in-memory progress with what storage holds for this key.
    /// Anonymous sessions and failing loads start empty.
    pub fn load_progress(&mut self) -> InitOutcome {
        let snapshot = self.fetch_snapshot();
        PropagationEngine::new(&self.graph).initialise_graph_state(&mut self.progress, &snapshot)
    }

    pub fn toggle_learned(&mut self, id: &str) -> KmapResult<LearnedOutcome> {
        let outcome = PropagationEngine::new(&self.graph).toggle_learned(&mut self.progress, id)?;
        self.events.emit_learned(&LearnedChangedEvent {
            concept_id: outcome.concept_id.clone(),
            learned: outcome.learned,
            changed: outcome.changed.clone(),
        });
        self.persist(ProgressKind::Learned);
        Ok(outcome)
    }

    pub fn set_goal(&mut self, id: &str) -> KmapResult<GoalOutcome> {
        let outcome = PropagationEngine::new(&self.graph).set_goal(&mut self.progress, id)?;
        self.goal_changed(&outcome);
        Ok(outcome)
    }

    pub fn unset_goal(&mut self, id: &str) -> KmapResult<GoalOutcome> {
        let outcome = PropagationEngine::new(&self.graph).unset_goal(&mut self.progress, id)?;
        self.goal_changed(&outcome);
        Ok(outcome)
    }

    pub fn reset_progress(&mut self) -> ResetOutcome {
        let outcome = PropagationEngine::new(&self.graph).reset_progress(&mut self.progress);
        self.events.emit_progress_reset(&ProgressResetEvent {
            cleared_learned: outcome.cleared_learned,
            cleared_goals: outcome.cleared_goals,
        });
        self.persist(ProgressKind::Learned);
        self.persist(ProgressKind::Goals);
        outcome
    }

    /// One concept to study next, narrowed towards the successors of
    /// `newly_learned` when that is given.
    pub fn next_concept(&mut self, newly_learned: Option<&str>) -> KmapResult<Option<String>> {
        let pick = Recommender::new(&self.graph).next_node_to_learn(
            &self.progress,
            newly_learned,
            self.rng.as_mut(),
        )?;
        Ok(pick)
    }

    /// Up to the configured batch size of ready concepts.
    pub fn recommend_batch(&mut self) -> KmapResult<Vec<String>> {
        let batch = Recommender::new(&self.graph).recommend_batch(
            &self.progress,
            self.batch_size,
            self.rng.as_mut(),
        )?;
        Ok(batch)
    }

    fn goal_changed(&self, outcome: &GoalOutcome) {
        if !outcome.changed {
            return;
        }
        self.events.emit_goal_changed(&GoalChangedEvent {
            concept_id: outcome.concept_id.clone(),
            is_goal: outcome.is_goal,
            path_size: self.progress.path_set().len(),
        });
        self.persist(ProgressKind::Goals);
    }

    fn fetch_snapshot(&self) -> ProgressSnapshot {
        let Some(storage) = self.storage_for_key() else {
            return ProgressSnapshot::default();
        };
        let _span = kmap_core::persistence_span!(self.key, "load").entered();
        let learned = storage.load_learned(&self.key).unwrap_or_else(|err| {
            tracing::warn!(%err, key = %self.key, "failed to load learned concepts");
            None
        });
        let goals = storage.load_goals(&self.key).unwrap_or_else(|err| {
            tracing::warn!(%err, key = %self.key, "failed to load goals");
            None
        });
        ProgressSnapshot {
            learned: learned.unwrap_or_default(),
            goals: goals.unwrap_or_default(),
        }
    }

    fn persist(&self, kind: ProgressKind) {
        let Some(storage) = self.storage_for_key() else {
            return;
        };
        let _span = kmap_core::persistence_span!(self.key, kind.as_str()).entered();
        let result = match kind {
            ProgressKind::Learned => storage.save_learned(&self.key, self.progress.learned_map()),
            ProgressKind::Goals => storage.save_goals(&self.key, self.progress.goals_map()),
        };
        let key = self.key.to_string();
        match result {
            Ok(()) => {
                tracing::debug!("progress saved");
                self.events.emit_save_succeeded(&SaveSucceededEvent { key, kind });
            }
            Err(err) => {
                tracing::warn!(%err, "progress save failed, keeping in-memory state");
                self.events.emit_save_failed(&SaveFailedEvent {
                    key,
                    kind,
                    message: err.to_string(),
                });
            }
        }
    }

    fn storage_for_key(&self) -> Option<&dyn IProgressStorage> {
        if !self.persistence_enabled || self.key.is_anonymous() {
            return None;
        }
        self.storage.as_deref()
    }

    // --- Focus and styling ---

    pub fn hover(&mut self, id: &str) {
        self.focus.hover(&self.graph, id);
    }

    pub fn clear_hover(&mut self) {
        self.focus.clear_hover();
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.focus.select(id);
        self.editor.select(id);
    }

    /// Start a focus animation on `id`. Returns `None`, changing nothing,
    /// while another focus still holds the latch.
    pub fn focus_on(&mut self, id: &str) -> Option<FocusGuard> {
        if !self.graph.contains(id) {
            return None;
        }
        let guard = self.latch.try_acquire()?;
        self.select(Some(id));
        self.focus.hover(&self.graph, id);
        Some(guard)
    }

    pub fn node_style(&self, id: &str) -> Option<NodeStyle> {
        self.styles
            .node_style(&self.graph, &self.progress, &self.focus, id)
    }

    pub fn edge_style(&self, edge_id: &str) -> Option<EdgeStyle> {
        self.styles
            .edge_style(&self.graph, &self.progress, &self.focus, edge_id)
    }

    // --- Edit mode ---

    pub fn mode(&self) -> EditorMode {
        self.editor.mode()
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.editor.set_mode(mode);
    }

    pub fn handle_input(&mut self, input: &EditorInput) -> KmapResult<EditOutcome> {
        let outcome = self.editor.handle_input(&mut self.graph, input)?;
        if let EditOutcome::Selected(id) = &outcome {
            self.focus.select(id.as_deref());
        }
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn execute(&mut self, command: EditCommand) -> KmapResult<EditOutcome> {
        let outcome = self.editor.execute(&mut self.graph, command)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn undo(&mut self) -> KmapResult<EditOutcome> {
        let outcome = self.editor.undo(&mut self.graph)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn redo(&mut self) -> KmapResult<EditOutcome> {
        let outcome = self.editor.redo(&mut self.graph)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn remove(&mut self, id: &str) -> KmapResult<EditOutcome> {
        let outcome = self.editor.remove(&mut self.graph, id)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn add_edge(&mut self, source: &str, target: &str) -> KmapResult<EditOutcome> {
        let outcome = self.editor.add_edge(&mut self.graph, source, target)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    pub fn move_concept(&mut self, concept_id: &str, parent: &str) -> KmapResult<EditOutcome> {
        let outcome = self.editor.move_concept(&mut self.graph, concept_id, parent)?;
        self.after_edit(&outcome);
        Ok(outcome)
    }

    /// Drop progress for concepts an edit removed and re-derive path and
    /// learned edges against the new structure.
    fn after_edit(&mut self, outcome: &EditOutcome) {
        let action = match outcome {
            EditOutcome::Applied(label) => *label,
            EditOutcome::Undone(_) => "undo",
            EditOutcome::Redone(_) => "redo",
            _ => return,
        };
        let engine = PropagationEngine::new(&self.graph);
        let stale = engine.stale_ids(&self.progress);
        engine.prune_removed(&mut self.progress, &stale);
        self.focus.retain_existing(&self.graph);
        self.events.emit_graph_edited(&GraphEditedEvent {
            action: action.to_string(),
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        });
    }
}

impl std::fmt::Debug for MapSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession")
            .field("key", &self.key)
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("learned", &self.progress.learned_set().len())
            .field("goals", &self.progress.goal_set().len())
            .field("mode", &self.editor.mode())
            .finish()
    }
}

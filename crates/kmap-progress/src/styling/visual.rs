//! Per-node visual state and brightness tiers.

use kmap_graph::{MapGraph, Neighborhood};

use crate::state::ProgressState;

/// Discrete emphasis level, 0 (dimmed) to 3 (focused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrightnessTier(u8);

impl BrightnessTier {
    pub const DIMMED: Self = Self(0);
    pub const NORMAL: Self = Self(1);
    pub const RAISED: Self = Self(2);
    pub const FOCUSED: Self = Self(3);

    /// Clamp `level` into `0..=3`.
    pub fn new(level: u8) -> Self {
        Self(level.min(3))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Transient UI focus: what is hovered and what is selected.
#[derive(Debug, Clone, Default)]
pub struct FocusContext {
    hovered: Option<String>,
    selected: Option<String>,
    neighborhood: Option<Neighborhood>,
}

impl FocusContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover `id`, capturing its neighbourhood from `graph`.
    pub fn hover(&mut self, graph: &MapGraph, id: &str) {
        let hood = graph.neighborhood(id);
        if hood.nodes.is_empty() {
            self.clear_hover();
        } else {
            self.hovered = Some(id.to_string());
            self.neighborhood = Some(hood);
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
        self.neighborhood = None;
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn neighborhood(&self) -> Option<&Neighborhood> {
        self.neighborhood.as_ref()
    }

    /// Forget references to nodes that no longer exist.
    pub fn retain_existing(&mut self, graph: &MapGraph) {
        if self.selected.as_deref().is_some_and(|id| !graph.contains(id)) {
            self.selected = None;
        }
        match self.hovered.clone() {
            Some(id) if graph.contains(&id) => self.hover(graph, &id),
            Some(_) => self.clear_hover(),
            None => {}
        }
    }
}

/// Membership flags for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeVisualState {
    pub learned: bool,
    pub goal: bool,
    pub path: bool,
    pub selected: bool,
    pub hovered: bool,
    /// Something else is hovered and this node is outside its neighbourhood.
    pub dimmed: bool,
}

impl NodeVisualState {
    pub fn of(id: &str, state: &ProgressState, focus: &FocusContext) -> Self {
        let dimmed = focus
            .neighborhood()
            .is_some_and(|hood| !hood.contains_node(id));
        Self {
            learned: state.is_learned(id),
            goal: state.is_goal(id),
            // Goal takes precedence over path.
            path: state.is_on_path(id) && !state.is_goal(id),
            selected: focus.selected() == Some(id),
            hovered: focus.hovered() == Some(id),
            dimmed,
        }
    }

    pub fn tier(&self) -> BrightnessTier {
        if self.dimmed {
            BrightnessTier::DIMMED
        } else if self.hovered || self.selected || self.goal {
            BrightnessTier::FOCUSED
        } else if self.learned || self.path {
            BrightnessTier::RAISED
        } else {
            BrightnessTier::NORMAL
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.hovered || self.selected
    }
}

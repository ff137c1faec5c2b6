//! StyleEngine: node and edge attribute projection.

use kmap_core::config::StylingConfig;
use kmap_core::models::MapNode;
use kmap_graph::MapGraph;

use super::colour::Rgb;
use super::visual::{BrightnessTier, FocusContext, NodeVisualState};
use crate::state::ProgressState;

const BASE_EDGE_WIDTH: f64 = 2.0;
const PATH_EDGE_WIDTH: f64 = 4.0;

/// Rendering attributes for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub background: Rgb,
    pub opacity: f64,
    pub size: f64,
    pub tier: BrightnessTier,
    pub label_visible: bool,
}

/// Rendering attributes for an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub opacity: f64,
    pub width: f64,
    pub learned: bool,
    pub on_path: bool,
}

/// Computes styles from a [`StylingConfig`].
#[derive(Debug, Clone)]
pub struct StyleEngine {
    config: StylingConfig,
    canvas: Rgb,
    fallback: Rgb,
}

impl StyleEngine {
    pub fn new(config: StylingConfig) -> Self {
        let canvas = Rgb::parse(&config.canvas_colour).unwrap_or(Rgb::new(255, 255, 255));
        let fallback =
            Rgb::parse(&config.fallback_topic_colour).unwrap_or(Rgb::new(0x88, 0x88, 0x88));
        Self {
            config,
            canvas,
            fallback,
        }
    }

    pub fn config(&self) -> &StylingConfig {
        &self.config
    }

    /// Style for node `id`, or `None` if it is not in the graph.
    pub fn node_style(
        &self,
        graph: &MapGraph,
        state: &ProgressState,
        focus: &FocusContext,
        id: &str,
    ) -> Option<NodeStyle> {
        let node = graph.node(id)?;
        let visual = NodeVisualState::of(id, state, focus);
        let tier = visual.tier();

        let (topic_colour, importance) = match &node.data {
            MapNode::Concept(concept) => (
                self.topic_colour(graph, &concept.parent),
                concept.relative_importance,
            ),
            MapNode::Topic(topic) => (self.parse_or_fallback(&topic.colour), 1.0),
        };

        // Learned concepts show their topic colour at full strength.
        let alpha = if visual.learned {
            1.0
        } else {
            self.config.unlearned_fill_alpha
        };
        let background = topic_colour.blend(self.canvas, alpha);

        let mut size = importance * self.config.base_node_size;
        if visual.is_highlighted() {
            size *= self.config.highlight_multiplier;
        }

        let opacity = if tier == BrightnessTier::NORMAL {
            self.baseline_opacity(importance)
        } else {
            self.opacity(tier)
        };

        Some(NodeStyle {
            background,
            opacity,
            size,
            tier,
            label_visible: tier >= BrightnessTier::RAISED,
        })
    }

    /// Style for edge `edge_id`, or `None` if it is not in the graph.
    pub fn edge_style(
        &self,
        graph: &MapGraph,
        state: &ProgressState,
        focus: &FocusContext,
        edge_id: &str,
    ) -> Option<EdgeStyle> {
        let edge = graph.edge(edge_id)?;
        let tracked = |id: &str| state.is_goal(id) || state.is_on_path(id);
        let on_path = tracked(&edge.source) && tracked(&edge.target);
        let learned = state.is_edge_learned(edge_id);

        let tier = match focus.neighborhood() {
            Some(hood) if !hood.contains_edge(edge_id) => BrightnessTier::DIMMED,
            Some(_) => BrightnessTier::FOCUSED,
            None if learned || on_path => BrightnessTier::RAISED,
            None => BrightnessTier::NORMAL,
        };

        Some(EdgeStyle {
            opacity: self.opacity(tier),
            width: if on_path { PATH_EDGE_WIDTH } else { BASE_EDGE_WIDTH },
            learned,
            on_path,
        })
    }

    fn opacity(&self, tier: BrightnessTier) -> f64 {
        self.config.tier_opacity[tier.index()]
    }

    /// Normal-tier opacity scaled by importance, bounded by the dimmed and
    /// raised tiers.
    fn baseline_opacity(&self, importance: f64) -> f64 {
        (self.opacity(BrightnessTier::NORMAL) * importance)
            .max(self.opacity(BrightnessTier::DIMMED))
            .min(self.opacity(BrightnessTier::RAISED))
    }

    fn topic_colour(&self, graph: &MapGraph, topic_id: &str) -> Rgb {
        graph
            .topic(topic_id)
            .map(|t| self.parse_or_fallback(&t.colour))
            .unwrap_or(self.fallback)
    }

    fn parse_or_fallback(&self, colour: &str) -> Rgb {
        Rgb::parse(colour).unwrap_or(self.fallback)
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new(StylingConfig::default())
    }
}

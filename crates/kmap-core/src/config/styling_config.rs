use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::BRIGHTNESS_TIERS;

/// Visual styling projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Node diameter for `relative_importance == 1.0`.
    pub base_node_size: f64,
    /// Size multiplier for highlighted nodes.
    pub highlight_multiplier: f64,
    /// Opacity per brightness tier 0..=3.
    pub tier_opacity: [f64; BRIGHTNESS_TIERS],
    /// Alpha of the topic colour over the canvas for unlearned concepts.
    pub unlearned_fill_alpha: f64,
    pub canvas_colour: String,
    /// Used when a topic colour is missing or unparsable.
    pub fallback_topic_colour: String,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            base_node_size: defaults::DEFAULT_BASE_NODE_SIZE,
            highlight_multiplier: defaults::DEFAULT_HIGHLIGHT_MULTIPLIER,
            tier_opacity: defaults::DEFAULT_TIER_OPACITY,
            unlearned_fill_alpha: defaults::DEFAULT_UNLEARNED_FILL_ALPHA,
            canvas_colour: defaults::DEFAULT_CANVAS_COLOUR.to_string(),
            fallback_topic_colour: defaults::DEFAULT_FALLBACK_TOPIC_COLOUR.to_string(),
        }
    }
}

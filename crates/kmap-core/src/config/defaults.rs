//! Compiled defaults for every config section.

pub const DEFAULT_BASE_NODE_SIZE: f64 = 40.0;
pub const DEFAULT_HIGHLIGHT_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_TIER_OPACITY: [f64; crate::constants::BRIGHTNESS_TIERS] = [0.15, 0.4, 0.7, 1.0];
pub const DEFAULT_UNLEARNED_FILL_ALPHA: f64 = 0.35;
pub const DEFAULT_CANVAS_COLOUR: &str = "#ffffff";
pub const DEFAULT_FALLBACK_TOPIC_COLOUR: &str = "#888888";
pub const DEFAULT_RELATIVE_IMPORTANCE: f64 = 1.0;

pub const DEFAULT_RECOMMENDATION_BATCH_SIZE: usize = 5;

pub const DEFAULT_PERSISTENCE_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_UNDO_LIMIT: usize = 100;

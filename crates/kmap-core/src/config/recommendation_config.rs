use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Maximum concepts returned by a frontier batch.
    pub batch_size: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_size: defaults::DEFAULT_RECOMMENDATION_BATCH_SIZE,
        }
    }
}

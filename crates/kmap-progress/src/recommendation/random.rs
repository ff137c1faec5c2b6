//! Random sources for the recommendation tie-break.

use kmap_core::config::RecommendationConfig;
use kmap_core::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `StdRng`-backed source. Seeded for reproducible sessions, entropy
/// otherwise.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self::new(config.seed)
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the first candidate in id order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl RandomSource for FirstCandidate {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

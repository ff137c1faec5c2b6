//! # kmap-progress
//!
//! Learner progress over a knowledge map: the learned/goal/path store,
//! the propagation engine that keeps those sets consistent with the graph,
//! the next-concept recommendation engine, and the styling projection.

pub mod engine;
pub mod recommendation;
pub mod state;
pub mod styling;

pub use engine::{GoalOutcome, InitOutcome, LearnedOutcome, PropagationEngine, ResetOutcome};
pub use recommendation::{FirstCandidate, Recommender, SeededRandom};
pub use state::ProgressState;
pub use styling::{BrightnessTier, EdgeStyle, FocusContext, NodeStyle, NodeVisualState, Rgb, StyleEngine};

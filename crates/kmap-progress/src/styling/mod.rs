//! Visual styling: a pure projection from graph and progress state to
//! rendering attributes. Nothing here is cached; callers recompute after
//! every relevant mutation.

mod colour;
mod engine;
mod visual;

pub use colour::Rgb;
pub use engine::{EdgeStyle, NodeStyle, StyleEngine};
pub use visual::{BrightnessTier, FocusContext, NodeVisualState};

//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod defaults;
pub mod editor_config;
pub mod kmap_config;
pub mod persistence_config;
pub mod recommendation_config;
pub mod styling_config;

pub use editor_config::EditorConfig;
pub use kmap_config::{ConfigOverrides, KmapConfig};
pub use persistence_config::PersistenceConfig;
pub use recommendation_config::RecommendationConfig;
pub use styling_config::StylingConfig;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `nodetype` discriminant for concept nodes in the map document.
pub const NODETYPE_CONCEPT: &str = "concept";

/// `nodetype` discriminant for topic nodes in the map document.
pub const NODETYPE_TOPIC: &str = "field";

/// User id recorded for sessions without a signed-in learner.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Number of discrete brightness tiers used for hover/focus emphasis.
pub const BRIGHTNESS_TIERS: usize = 4;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "kmap.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "KMAP_LOG";

use serde::{Deserialize, Serialize};

use super::defaults;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undoable commands retained.
    pub undo_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: defaults::DEFAULT_UNDO_LIMIT,
        }
    }
}

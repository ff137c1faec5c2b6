use serde::{Deserialize, Serialize};

use super::defaults;

/// Progress persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// When false, mutations are never saved.
    pub enabled: bool,
    /// Backend base URL for the HTTP progress store.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            timeout_secs: defaults::DEFAULT_PERSISTENCE_TIMEOUT_SECS,
        }
    }
}

//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EditorConfig, PersistenceConfig, RecommendationConfig, StylingConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`KMAP_*`)
/// 3. Project config (`kmap.toml` in the given root)
/// 4. User config (`~/.kmap/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KmapConfig {
    pub styling: StylingConfig,
    pub recommendation: RecommendationConfig,
    pub persistence: PersistenceConfig,
    pub editor: EditorConfig,
}

/// Programmatic overrides, e.g. from the page controller.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_node_size: Option<f64>,
    pub recommendation_seed: Option<u64>,
    pub persistence_enabled: Option<bool>,
    pub persistence_base_url: Option<String>,
    pub undo_limit: Option<usize>,
}

impl KmapConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        // Layer 4 (lowest priority): user config. A broken user file is fatal,
        // an unreadable one is skipped.
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                match Self::read_toml(&user_path) {
                    Ok(value) => merge_values(&mut merged, value),
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => tracing::warn!("skipping user config: {err}"),
                }
            }
        }

        // Layer 3: project config
        let project_path = root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            merge_values(&mut merged, Self::read_toml(&project_path)?);
        }

        let mut config: KmapConfig =
            merged.try_into().map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: KmapConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let styling = &self.styling;
        if !(styling.base_node_size > 0.0) {
            return Err(invalid("styling.base_node_size", "must be greater than 0"));
        }
        if !(styling.highlight_multiplier >= 1.0) {
            return Err(invalid("styling.highlight_multiplier", "must be at least 1.0"));
        }
        if styling.tier_opacity.iter().any(|o| !(0.0..=1.0).contains(o)) {
            return Err(invalid("styling.tier_opacity", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&styling.unlearned_fill_alpha) {
            return Err(invalid(
                "styling.unlearned_fill_alpha",
                "must be between 0.0 and 1.0",
            ));
        }
        if self.recommendation.batch_size == 0 {
            return Err(invalid("recommendation.batch_size", "must be greater than 0"));
        }
        if self.editor.undo_limit == 0 {
            return Err(invalid("editor.undo_limit", "must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.kmap/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".kmap").join("config.toml"))
    }

    fn read_toml(path: &Path) -> Result<toml::Value, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `KMAP_BASE_NODE_SIZE`, `KMAP_UNDO_LIMIT`, etc.
    fn apply_env_overrides(config: &mut KmapConfig) {
        if let Ok(val) = std::env::var("KMAP_BASE_NODE_SIZE") {
            if let Ok(v) = val.parse::<f64>() {
                config.styling.base_node_size = v;
            }
        }
        if let Ok(val) = std::env::var("KMAP_HIGHLIGHT_MULTIPLIER") {
            if let Ok(v) = val.parse::<f64>() {
                config.styling.highlight_multiplier = v;
            }
        }
        if let Ok(val) = std::env::var("KMAP_RECOMMENDATION_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.recommendation.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KMAP_PERSISTENCE_BASE_URL") {
            config.persistence.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("KMAP_PERSISTENCE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.persistence.enabled = v;
            }
        }
        if let Ok(val) = std::env::var("KMAP_UNDO_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.editor.undo_limit = v;
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut KmapConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.base_node_size {
            config.styling.base_node_size = v;
        }
        if let Some(v) = overrides.recommendation_seed {
            config.recommendation.seed = Some(v);
        }
        if let Some(v) = overrides.persistence_enabled {
            config.persistence.enabled = v;
        }
        if let Some(ref v) = overrides.persistence_base_url {
            config.persistence.base_url = Some(v.clone());
        }
        if let Some(v) = overrides.undo_limit {
            config.editor.undo_limit = v;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Deep-merge `overlay` into `base`. Tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

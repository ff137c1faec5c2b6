//! Tests for the layered configuration system.

use std::sync::Mutex;

use kmap_core::config::{ConfigOverrides, KmapConfig};
use kmap_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_kmap_env_vars() {
    for key in [
        "KMAP_BASE_NODE_SIZE",
        "KMAP_HIGHLIGHT_MULTIPLIER",
        "KMAP_RECOMMENDATION_SEED",
        "KMAP_PERSISTENCE_BASE_URL",
        "KMAP_PERSISTENCE_ENABLED",
        "KMAP_UNDO_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_are_valid() {
    let config = KmapConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.styling.base_node_size, 40.0);
    assert_eq!(config.styling.highlight_multiplier, 1.5);
    assert_eq!(config.editor.undo_limit, 100);
    assert!(config.persistence.enabled);
    assert!(config.recommendation.seed.is_none());
}

#[test]
fn layered_resolution_prefers_overrides_then_env_then_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kmap_env_vars();

    let home = tempdir();
    std::env::set_var("HOME", home.path());
    std::fs::create_dir_all(home.path().join(".kmap")).unwrap();
    std::fs::write(
        home.path().join(".kmap").join("config.toml"),
        r#"
[styling]
base_node_size = 10.0
highlight_multiplier = 3.0
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("kmap.toml"),
        r#"
[styling]
base_node_size = 20.0

[editor]
undo_limit = 7
"#,
    )
    .unwrap();

    std::env::set_var("KMAP_UNDO_LIMIT", "9");

    let overrides = ConfigOverrides {
        recommendation_seed: Some(42),
        ..Default::default()
    };
    let config = KmapConfig::load(project.path(), Some(&overrides)).unwrap();

    // user file survives where nothing overrides it
    assert_eq!(config.styling.highlight_multiplier, 3.0);
    // project beats user
    assert_eq!(config.styling.base_node_size, 20.0);
    // env beats project
    assert_eq!(config.editor.undo_limit, 9);
    // overrides beat everything
    assert_eq!(config.recommendation.seed, Some(42));

    clear_kmap_env_vars();
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kmap_env_vars();
    let home = tempdir();
    std::env::set_var("HOME", home.path());

    let project = tempdir();
    std::fs::write(project.path().join("kmap.toml"), "[styling\nbase_node_size = ").unwrap();

    let err = KmapConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_bad_values() {
    let err = KmapConfig::from_toml("[styling]\nhighlight_multiplier = 0.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "styling.highlight_multiplier"));

    let err = KmapConfig::from_toml("[editor]\nundo_limit = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "editor.undo_limit"));

    let err = KmapConfig::from_toml("[styling]\ntier_opacity = [0.1, 0.2, 0.3, 1.5]\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = KmapConfig::from_toml("[recommendation]\nseed = 7\n").unwrap();
    assert_eq!(config.recommendation.seed, Some(7));
    assert_eq!(config.recommendation.batch_size, 5);
    assert_eq!(config.styling, kmap_core::config::StylingConfig::default());
}

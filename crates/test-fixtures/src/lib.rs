//! Test fixture loader for knowledge map documents.
//!
//! Fixture maps live in this crate's `maps/` directory and are shared by the
//! graph, progress, editor and session test suites.

use kmap_core::models::MapDocument;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture maps.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the maps dir shows up.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("maps").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/maps from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a map document by name, e.g. `load_map("chain")` reads
/// `maps/chain.json`.
pub fn load_map(name: &str) -> MapDocument {
    load_fixture(&format!("maps/{name}.json"))
}

/// Raw JSON text of a fixture map.
pub fn load_map_text(name: &str) -> String {
    let path = fixture_path(&format!("maps/{name}.json"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Names of every fixture map.
pub fn list_maps() -> Vec<String> {
    let dir = fixtures_root().join("maps");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}

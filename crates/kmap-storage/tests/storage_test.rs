//! Tests for the in-memory progress store and the file map repository.

use std::collections::BTreeMap;

use kmap_core::errors::StorageError;
use kmap_core::events::ProgressKind;
use kmap_core::models::{MapDocument, ProgressKey};
use kmap_core::traits::{IMapRepository, IProgressStorage};
use kmap_core::KmapError;
use kmap_storage::{FileMapRepository, MemoryProgressStore};

fn mapping(ids: &[&str]) -> BTreeMap<String, bool> {
    ids.iter().map(|id| (id.to_string(), true)).collect()
}

#[test]
fn memory_store_round_trips_per_key_and_kind() {
    let store = MemoryProgressStore::new();
    let alice = ProgressKey::new("alice", "maths");
    let anon = ProgressKey::anonymous("maths");

    assert_eq!(store.load_learned(&alice).unwrap(), None);
    store.save_learned(&alice, &mapping(&["a", "b"])).unwrap();
    store.save_goals(&alice, &mapping(&["c"])).unwrap();

    assert_eq!(store.load_learned(&alice).unwrap(), Some(mapping(&["a", "b"])));
    assert_eq!(store.load_goals(&alice).unwrap(), Some(mapping(&["c"])));
    assert_eq!(store.load_learned(&anon).unwrap(), None);
    assert_eq!(store.save_count(), 2);
}

#[test]
fn memory_store_failure_switch() {
    let store = MemoryProgressStore::new();
    let key = ProgressKey::new("u", "m");
    store.insert(ProgressKind::Goals, &key, mapping(&["x"]));

    store.set_failing(true);
    let err = store.save_goals(&key, &BTreeMap::new()).unwrap_err();
    assert!(matches!(
        err,
        KmapError::Storage(StorageError::Unavailable { .. })
    ));
    assert!(store.load_goals(&key).is_err());

    store.set_failing(false);
    assert_eq!(store.load_goals(&key).unwrap(), Some(mapping(&["x"])));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn file_repository_saves_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileMapRepository::open(dir.path().join("maps")).unwrap();
    let doc = test_fixtures::load_map("diamond");

    assert!(repo.load_map("diamond").unwrap().is_none());
    repo.save_map("diamond", &doc).unwrap();
    repo.save_map("chain", &test_fixtures::load_map("chain")).unwrap();

    let loaded: MapDocument = repo.load_map("diamond").unwrap().unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(repo.list_maps().unwrap(), vec!["chain", "diamond"]);
}

#[test]
fn file_repository_rejects_path_like_ids() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileMapRepository::open(dir.path()).unwrap();
    assert!(repo.load_map("../etc/passwd").is_err());
    assert!(repo.save_map("", &MapDocument::default()).is_err());
}

#[test]
fn file_repository_reports_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileMapRepository::open(dir.path()).unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    let err = repo.load_map("broken").unwrap_err();
    assert!(matches!(err, KmapError::Serialization(_)));
}

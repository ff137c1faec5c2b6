//! In-process progress store.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use kmap_core::errors::StorageError;
use kmap_core::events::ProgressKind;
use kmap_core::models::ProgressKey;
use kmap_core::traits::IProgressStorage;
use kmap_core::KmapResult;

type Slot = (ProgressKind, ProgressKey);

/// Progress store backed by a `RwLock<HashMap>`.
///
/// `set_failing(true)` makes every call fail with
/// `StorageError::Unavailable`, for exercising the no-rollback path.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    data: RwLock<HashMap<Slot, BTreeMap<String, bool>>>,
    failing: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Seed a mapping directly.
    pub fn insert(&self, kind: ProgressKind, key: &ProgressKey, mapping: BTreeMap<String, bool>) {
        if let Ok(mut data) = self.data.write() {
            data.insert((kind, key.clone()), mapping);
        }
    }

    fn check(&self) -> KmapResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                reason: "memory store set to fail".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn load(
        &self,
        kind: ProgressKind,
        key: &ProgressKey,
    ) -> KmapResult<Option<BTreeMap<String, bool>>> {
        self.check()?;
        let data = self.data.read().map_err(|_| StorageError::Unavailable {
            reason: "lock poisoned".to_string(),
        })?;
        Ok(data.get(&(kind, key.clone())).cloned())
    }

    fn save(
        &self,
        kind: ProgressKind,
        key: &ProgressKey,
        mapping: &BTreeMap<String, bool>,
    ) -> KmapResult<()> {
        self.check()?;
        let mut data = self.data.write().map_err(|_| StorageError::Unavailable {
            reason: "lock poisoned".to_string(),
        })?;
        data.insert((kind, key.clone()), mapping.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl IProgressStorage for MemoryProgressStore {
    fn load_learned(&self, key: &ProgressKey) -> KmapResult<Option<BTreeMap<String, bool>>> {
        self.load(ProgressKind::Learned, key)
    }

    fn load_goals(&self, key: &ProgressKey) -> KmapResult<Option<BTreeMap<String, bool>>> {
        self.load(ProgressKind::Goals, key)
    }

    fn save_learned(&self, key: &ProgressKey, learned: &BTreeMap<String, bool>) -> KmapResult<()> {
        self.save(ProgressKind::Learned, key, learned)
    }

    fn save_goals(&self, key: &ProgressKey, goals: &BTreeMap<String, bool>) -> KmapResult<()> {
        self.save(ProgressKind::Goals, key, goals)
    }
}

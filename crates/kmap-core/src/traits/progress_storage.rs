use std::collections::BTreeMap;

use crate::errors::KmapResult;
use crate::models::ProgressKey;

/// Load/save primitives for the two persisted progress mappings.
///
/// Loads return `Ok(None)` when the backend has nothing for the key;
/// callers treat that as empty state.
pub trait IProgressStorage: Send + Sync {
    fn load_learned(&self, key: &ProgressKey) -> KmapResult<Option<BTreeMap<String, bool>>>;
    fn load_goals(&self, key: &ProgressKey) -> KmapResult<Option<BTreeMap<String, bool>>>;
    fn save_learned(&self, key: &ProgressKey, learned: &BTreeMap<String, bool>) -> KmapResult<()>;
    fn save_goals(&self, key: &ProgressKey, goals: &BTreeMap<String, bool>) -> KmapResult<()>;
}

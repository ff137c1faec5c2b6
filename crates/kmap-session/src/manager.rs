//! SessionManager: live map sessions keyed by `"{user}:{map}"`.

use std::sync::Arc;

use dashmap::DashMap;
use kmap_core::models::ProgressKey;

use crate::session::MapSession;

/// Concurrent registry of map sessions.
pub struct SessionManager {
    sessions: Arc<DashMap<String, MapSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Registry key for a learner on a map.
    pub fn session_key(key: &ProgressKey) -> String {
        key.to_string()
    }

    /// Register a session, replacing any previous one for the same key.
    /// Returns the registry key.
    pub fn insert(&self, session: MapSession) -> String {
        let key = Self::session_key(session.key());
        if self.sessions.insert(key.clone(), session).is_some() {
            tracing::debug!(%key, "replaced existing session");
        }
        key
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sessions.contains_key(key)
    }

    /// Run `f` against a session. `None` if no session has that key.
    pub fn with_session<R>(&self, key: &str, f: impl FnOnce(&MapSession) -> R) -> Option<R> {
        self.sessions.get(key).map(|entry| f(entry.value()))
    }

    /// Run `f` with exclusive access to a session.
    pub fn with_session_mut<R>(
        &self,
        key: &str,
        f: impl FnOnce(&mut MapSession) -> R,
    ) -> Option<R> {
        self.sessions
            .get_mut(key)
            .map(|mut entry| f(entry.value_mut()))
    }

    pub fn remove(&self, key: &str) -> Option<MapSession> {
        self.sessions.remove(key).map(|(_, session)| session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Registry keys in sorted order.
    pub fn session_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.sessions.iter().map(|r| r.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

//! Progress payloads exchanged with the persistence collaborator.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::ANONYMOUS_USER;
use crate::errors::KmapResult;

/// Persistence key: one learner on one map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressKey {
    pub user_id: String,
    pub map_id: String,
}

impl ProgressKey {
    pub fn new(user_id: impl Into<String>, map_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            map_id: map_id.into(),
        }
    }

    /// Key for a learner who is not signed in.
    pub fn anonymous(map_id: impl Into<String>) -> Self {
        Self::new(ANONYMOUS_USER, map_id)
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id == ANONYMOUS_USER
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user_id, self.map_id)
    }
}

/// `{ "learned_concepts": { id: bool } }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnedPayload {
    #[serde(default)]
    pub learned_concepts: BTreeMap<String, bool>,
}

/// `{ "goal_concepts": { id: bool } }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalPayload {
    #[serde(default)]
    pub goal_concepts: BTreeMap<String, bool>,
}

/// Both progress mappings as loaded at session start.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub learned: BTreeMap<String, bool>,
    pub goals: BTreeMap<String, bool>,
}

impl ProgressSnapshot {
    pub fn is_empty(&self) -> bool {
        !self.learned.values().any(|&v| v) && !self.goals.values().any(|&v| v)
    }
}

/// Decode a payload that may arrive either as a JSON object or as a JSON
/// string containing the object. `null` decodes to the default value.
pub fn parse_lenient<T: DeserializeOwned + Default>(value: serde_json::Value) -> KmapResult<T> {
    match value {
        serde_json::Value::Null => Ok(T::default()),
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(T::default()),
        serde_json::Value::String(text) => Ok(serde_json::from_str(&text)?),
        other => Ok(serde_json::from_value(other)?),
    }
}

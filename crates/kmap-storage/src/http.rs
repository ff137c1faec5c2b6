//! HTTP progress client (blocking `reqwest`).

use std::collections::BTreeMap;
use std::time::Duration;

use kmap_core::config::PersistenceConfig;
use kmap_core::errors::StorageError;
use kmap_core::events::ProgressKind;
use kmap_core::models::ProgressKey;
use kmap_core::traits::IProgressStorage;
use kmap_core::KmapResult;

use crate::endpoints;

/// Progress store talking to the backend over HTTP.
///
/// A non-success status on load is logged and treated as "no data"; on save
/// it is an error for the caller to log.
#[derive(Debug, Clone)]
pub struct HttpProgressStore {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpProgressStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> KmapResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build from config. Fails when no base URL is configured.
    pub fn from_config(config: &PersistenceConfig) -> KmapResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| StorageError::Unavailable {
                reason: "persistence.base_url is not set".to_string(),
            })?;
        Self::new(base_url, Duration::from_secs(config.timeout_secs))
    }

    fn load(
        &self,
        kind: ProgressKind,
        key: &ProgressKey,
    ) -> KmapResult<Option<BTreeMap<String, bool>>> {
        let url = endpoints::progress_url(&self.base_url, kind, key);
        let response = self.client.get(&url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                "progress load failed, using empty state"
            );
            return Ok(None);
        }
        let body: serde_json::Value =
            response
                .json()
                .map_err(|e| StorageError::MalformedPayload {
                    message: e.to_string(),
                })?;
        Ok(Some(endpoints::decode(kind, body)?))
    }

    fn save(
        &self,
        kind: ProgressKind,
        key: &ProgressKey,
        mapping: &BTreeMap<String, bool>,
    ) -> KmapResult<()> {
        let url = endpoints::progress_url(&self.base_url, kind, key);
        let response = self
            .client
            .post(&url)
            .json(&endpoints::encode(kind, mapping))
            .send()
            .map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }
        Ok(())
    }
}

impl IProgressStorage for HttpProgressStore {
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

fn transport(err: reqwest::Error) -> StorageError {
    StorageError::Transport {
        message: err.to_string(),
    }
}

//! URL layout and payload codec for the progress backend.
//!
//! `GET/POST {base}/api/progress/{kind}/{user}/{map}` where `kind` is
//! `learned` or `goals`. Bodies are `{"learned_concepts": {..}}` and
//! `{"goal_concepts": {..}}`; responses may arrive double-encoded as a
//! JSON string.

use std::collections::BTreeMap;

use kmap_core::events::ProgressKind;
use kmap_core::models::{parse_lenient, GoalPayload, LearnedPayload, ProgressKey};
use kmap_core::KmapResult;

pub fn progress_url(base_url: &str, kind: ProgressKind, key: &ProgressKey) -> String {
    format!(
        "{}/api/progress/{}/{}/{}",
        base_url.trim_end_matches('/'),
        kind.as_str(),
        key.user_id,
        key.map_id
    )
}

/// Request body for a save.
pub fn encode(kind: ProgressKind, mapping: &BTreeMap<String, bool>) -> serde_json::Value {
    match kind {
        ProgressKind::Learned => serde_json::json!({ "learned_concepts": mapping }),
        ProgressKind::Goals => serde_json::json!({ "goal_concepts": mapping }),
    }
}

/// Decode a load response, accepting an object or a string holding one.
pub fn decode(kind: ProgressKind, body: serde_json::Value) -> KmapResult<BTreeMap<String, bool>> {
    Ok(match kind {
        ProgressKind::Learned => parse_lenient::<LearnedPayload>(body)?.learned_concepts,
        ProgressKind::Goals => parse_lenient::<GoalPayload>(body)?.goal_concepts,
    })
}

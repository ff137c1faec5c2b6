//! KmapErrorCode trait for the browser bridge.

/// Every error enum provides a stable error code string so the page
/// controller can branch on failures without parsing messages.
pub trait KmapErrorCode {
    /// Returns the error code string (e.g., "GRAPH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted bridge string: `[ERROR_CODE] message`.
    fn bridge_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const EDGE_REJECTED: &str = "EDGE_REJECTED";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const INVALID_IMPORTANCE: &str = "INVALID_IMPORTANCE";
pub const PROGRESS_ERROR: &str = "PROGRESS_ERROR";
pub const MISSING_GOAL: &str = "MISSING_GOAL";
pub const EDITOR_ERROR: &str = "EDITOR_ERROR";
pub const NOTHING_TO_UNDO: &str = "NOTHING_TO_UNDO";
pub const NOTHING_TO_REDO: &str = "NOTHING_TO_REDO";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

//! Span definitions per operation: propagation, recommendation, editor, persistence.

/// Create a propagation span.
#[macro_export]
macro_rules! propagation_span {
    ($op:expr, $concept_id:expr) => {
        tracing::debug_span!("kmap.propagation", op = %$op, concept_id = %$concept_id)
    };
}

/// Create a recommendation span.
#[macro_export]
macro_rules! recommendation_span {
    ($goal_count:expr) => {
        tracing::debug_span!("kmap.recommendation", goal_count = $goal_count)
    };
}

/// Create an editor span.
#[macro_export]
macro_rules! editor_span {
    ($command:expr) => {
        tracing::debug_span!("kmap.editor", command = %$command)
    };
}

/// Create a persistence span.
#[macro_export]
macro_rules! persistence_span {
    ($key:expr, $kind:expr) => {
        tracing::info_span!("kmap.persistence", key = %$key, kind = %$kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROPAGATION: &str = "kmap.propagation";
    pub const RECOMMENDATION: &str = "kmap.recommendation";
    pub const EDITOR: &str = "kmap.editor";
    pub const PERSISTENCE: &str = "kmap.persistence";
}

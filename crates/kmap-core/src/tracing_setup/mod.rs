//! Tracing setup: `tracing` with `EnvFilter`, per-subsystem log levels.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter used when `KMAP_LOG` is absent.
pub const DEFAULT_FILTER: &str = "warn,kmap_core=info,kmap_graph=info,kmap_progress=info,\
kmap_editor=info,kmap_storage=info,kmap_session=info";

/// Initialize the tracing subscriber.
///
/// Reads `KMAP_LOG` for per-subsystem levels, e.g.
/// `KMAP_LOG=kmap_progress=debug,kmap_editor=info`.
/// Falls back to [`DEFAULT_FILTER`] when unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .init();
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
/// Returns false if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .try_init()
        .is_ok()
}

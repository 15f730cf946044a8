//! Tracing setup: structured logging plus span macros per pipeline stage.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the Faultline tracing subscriber.
///
/// Reads `FAULTLINE_LOG` for per-target levels, e.g.
/// `FAULTLINE_LOG=faultline_narrative=debug,faultline_signals=info`.
/// Falls back to `faultline=info`. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Initialize JSON-formatted output with an explicit filter string.
///
/// Idempotent, and a no-op if [`init_tracing`] already ran.
pub fn init_json_tracing(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    });
}

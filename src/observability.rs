//! Observability utilities.
//!
//! The kit logs through `tracing`; the embedding application may install its
//! own subscriber instead, in which case this initializer quietly steps
//! aside.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn json_logs_requested() -> bool {
    std::env::var("RESPONSYS_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Initialize the tracing subscriber once for the process.
///
/// Format defaults to compact text, switched to JSON via
/// `RESPONSYS_LOG_FORMAT=json`; the filter comes from `RUST_LOG` and
/// defaults to `info`.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let result = if json_logs_requested() {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact())
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}

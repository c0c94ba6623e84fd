//! Structured tracing setup.
//!
//! Events go to stderr so that stdout carries only the report. The filter
//! comes from `RUST_LOG` (default `warn`); set `FCFS_TRACE_JSON=1` for JSON
//! lines.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that switches output to JSON.
pub const TRACE_JSON_ENV: &str = "FCFS_TRACE_JSON";

/// Installs the global subscriber. Later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(json = use_json, "tracing initialized");
    }
}

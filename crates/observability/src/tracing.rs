//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{LogFormat, ObservabilityConfig};

const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops and return `false`).
pub fn init(config: &ObservabilityConfig) -> bool {
    let (filter, filter_error) = build_filter(&config.filter);

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
            .is_ok(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok(),
    };

    if installed {
        if let Some(err) = &filter_error {
            ::tracing::warn!(
                filter = %config.filter,
                error = %err,
                "invalid log filter; falling back to info"
            );
        }
        if let Some(raw) = &config.unrecognized_format {
            ::tracing::warn!(value = %raw, "unknown log format; falling back to json");
        }
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed
}

/// Parse `directives`, keeping the parse error so it can be reported once
/// logging is up.
fn build_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    }
}

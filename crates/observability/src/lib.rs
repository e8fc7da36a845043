//! Tracing and logging setup shared by processes embedding the domain crates.

/// Environment-driven logging configuration.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> bool {
    init_with(&ObservabilityConfig::from_env())
}

/// Initialize process-wide tracing from an explicit configuration.
///
/// Returns `true` if this call installed the global subscriber.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    tracing::init(config)
}

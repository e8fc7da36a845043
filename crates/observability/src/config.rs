//! Logging configuration read from environment variables.
//!
//! - `RUST_LOG`: filter directives (default `info`).
//! - `ACME_LOG_FORMAT`: `json` (default) or `text`.

/// Environment variable selecting the output format.
pub const LOG_FORMAT_VAR: &str = "ACME_LOG_FORMAT";

/// Environment variable holding filter directives.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "info";

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line with timestamps.
    #[default]
    Json,
    /// Human-readable single-line text.
    Text,
}

impl LogFormat {
    /// Case-insensitive parse; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "plain" => Some(Self::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Raw `ACME_LOG_FORMAT` value that could not be parsed, reported once
    /// the subscriber is up.
    pub unrecognized_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            unrecognized_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, unrecognized_format) = match lookup(LOG_FORMAT_VAR) {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            unrecognized_format,
        }
    }
}

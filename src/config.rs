//! # Handler Configuration
//!
//! Process-level settings loaded from environment variables.
//!
//! Only ambient concerns live here. The reconciliation bounds in
//! [`crate::constants`] are fixed and deliberately absent.

use crate::constants::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    /// Parse a format name, falling back to JSON for anything unrecognised
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("text") || value.eq_ignore_ascii_case("pretty") {
            Self::Text
        } else {
            Self::Json
        }
    }
}

/// Handler-level configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: LogFormat,
    /// Enable color in text format logs
    pub log_enable_color: bool,
    /// Register and record Prometheus metrics
    pub enable_metrics: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::parse(DEFAULT_LOG_FORMAT),
            log_enable_color: false,
            enable_metrics: true,
        }
    }
}

impl HandlerConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env_var_or_default_str("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: LogFormat::parse(&env_var_or_default_str("LOG_FORMAT", DEFAULT_LOG_FORMAT)),
            log_enable_color: env_var_or_default_bool("LOG_ENABLE_COLOR", false),
            enable_metrics: env_var_or_default_bool("ENABLE_METRICS", true),
        }
    }

    /// Filter directive derived from `log_level`, e.g. `info`
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.log_level.to_lowercase()
    }
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |v| parse_bool(&v))
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

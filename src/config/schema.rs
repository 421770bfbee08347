//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the approval console.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend API settings.
    pub api: ApiConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, including the backend's `/api` prefix.
    pub base_url: String,

    /// Transport deadline per request. Generous because the hosted backend
    /// cold-starts in 30-50s.
    pub request_timeout_secs: u64,

    /// How long a request may stay pending before the user is told it is
    /// unusually slow.
    pub slow_warning_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://human-looping-backend.onrender.com/api".to_string(),
            request_timeout_secs: 60,
            slow_warning_secs: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is not set.
    pub log_level: String,

    /// Output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, for interactive use.
    Pretty,
    /// JSON lines, for machine parsing.
    Json,
}

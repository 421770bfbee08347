//! Error taxonomy and transport-boundary classification.
//!
//! # Responsibilities
//! - Map raw transport failures into a fixed set of user-presentable
//!   categories (timeout, server, network, unknown)
//! - Prefer the server-supplied `message` field for error responses
//!
//! # Design Decisions
//! - Classification is total and deterministic; every failure lands in
//!   exactly one category
//! - The `Display` impl of every variant is the user-safe message; callers
//!   display it without further interpretation

use thiserror::Error;

/// Shown when the transport deadline expires before any response arrives.
/// The hosted backend sleeps when idle and needs tens of seconds to wake.
pub const TIMEOUT_MESSAGE: &str =
    "The server is starting up. This can take 30-50 seconds on the first request. Please try again.";

/// Shown when the request went out but no response ever came back.
pub const NETWORK_MESSAGE: &str =
    "Cannot connect to server. Please check your internet connection or try again later.";

/// Errors that can occur when calling the approval backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level deadline exceeded before any response.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// The server responded with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request was sent but no response was received at all.
    #[error("{}", NETWORK_MESSAGE)]
    Network,

    /// Any failure mode the other categories do not cover.
    #[error("{0}")]
    Unknown(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Short category name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Timeout => "timeout",
            ApiError::Server { .. } => "server",
            ApiError::Network => "network",
            ApiError::Unknown(_) => "unknown",
        }
    }

    /// Classify a transport failure.
    ///
    /// Timeouts take precedence over everything else. Body decode failures
    /// are not connectivity problems, so they fall through to `Unknown`.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Unknown(err.to_string())
        } else if err.is_connect() || err.is_request() {
            ApiError::Network
        } else {
            ApiError::Unknown(err.to_string())
        }
    }

    /// Classify a non-success response, preferring the server's own
    /// `message` field over the generic status fallback.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| format!("Server error: {}", status));
        ApiError::Server { status, message }
    }
}

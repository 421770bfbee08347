//! Structured logging initialization.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, at startup
//! - Configure the level from config, overridable via RUST_LOG
//! - Select pretty or JSON formatting

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, ObservabilityConfig};

/// Initialize the global tracing subscriber.
///
/// Call once from the binary; a second call panics, which is the desired
/// failure mode for a double-initialized logger.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("approval_console={}", config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

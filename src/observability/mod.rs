//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured tracing throughout; no bare println diagnostics in library
//!   code
//! - RUST_LOG always wins over the configured level
//! - JSON output is opt-in via config for machine parsing

pub mod logging;

pub use logging::init_logging;

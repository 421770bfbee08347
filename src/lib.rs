//! Client library for the workflow approval service.
//!
//! Provides a typed REST client for the backend API, a request lifecycle
//! controller that discloses slow (cold-starting) backends to the user, and
//! dashboard aggregation over workflow records.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod lifecycle;
pub mod observability;

pub use api::client::ApiClient;
pub use api::error::{ApiError, ApiResult};
pub use config::schema::ConsoleConfig;
pub use lifecycle::LifecycleController;

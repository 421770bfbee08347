//! REST client subsystem.
//!
//! # Data Flow
//! ```text
//! Caller invokes endpoint method
//!     → client.rs (build request, attach request ID, send with 60s deadline)
//!     → backend responds (or the transport fails)
//!     → error.rs (classify failures into the user-facing taxonomy)
//!     → types.rs (deserialize success bodies into domain types)
//!     → Result<T, ApiError> back to caller
//! ```
//!
//! # Design Decisions
//! - Classification happens exactly once, at the transport boundary;
//!   everything above this module only ever sees user-safe messages
//! - No automatic retry at any layer; retry is a manual user action
//! - Request/response logging is structured tracing, never println

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use types::{Approval, ApprovalDecision, NewWorkflow, Workflow};

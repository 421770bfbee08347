//! Dashboard aggregation over workflow records.
//!
//! # Data Flow
//! ```text
//! GET /workflows (via api::client)
//!     → stats.rs (count workflows per status)
//!     → activity.rs (newest first, display labels, relative times)
//!     → rendered by the console binary
//! ```

pub mod activity;
pub mod stats;

pub use activity::{format_time_ago, recent_activity, ActivityEntry, RECENT_LIMIT};
pub use stats::DashboardStats;

//! Request lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Caller hands an in-flight API call to the controller:
//!     → attempt.rs (busy flag set, previous error cleared)
//!     → controller.rs (one-shot warning timer races the operation)
//!     → timer fires first: slow warning raised, exactly once
//!     → operation settles: timer dead, busy/warning cleared in one step
//!     → Result<T, ApiError> back to caller, on_settled invoked
//! ```
//!
//! # Design Decisions
//! - The warning timer and the operation race inside one select; settlement
//!   implicitly cancels the timer, so a late warning cannot fire
//! - The controller owns its attempt state exclusively; `run` takes
//!   `&mut self`, so overlapping attempts need separate controllers
//! - The wrapped operation is not cancellable here; the transport deadline
//!   bounds how long an attempt can stay pending

pub mod attempt;
pub mod controller;

pub use attempt::RequestAttempt;
pub use controller::{LifecycleController, DEFAULT_SLOW_WARNING};

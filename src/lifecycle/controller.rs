//! Lifecycle controller wrapping one API call at a time.
//!
//! # Responsibilities
//! - Disclose to the user when a call outlives the slow threshold
//! - Guarantee busy/warning flags reset on every settlement path
//! - Record the classified failure message on the attempt

use std::future::Future;
use std::pin::pin;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::lifecycle::attempt::RequestAttempt;

/// How long an attempt may stay pending before the slow warning fires.
/// Matches the point where a cold-starting backend becomes noticeable.
pub const DEFAULT_SLOW_WARNING: Duration = Duration::from_secs(5);

/// Runs one asynchronous API call while tracking its attempt state.
///
/// `run` takes `&mut self`, so a single controller cannot have overlapping
/// attempts; callers that want concurrent calls use separate controllers.
#[derive(Debug)]
pub struct LifecycleController {
    warn_after: Duration,
    attempt: RequestAttempt,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new(DEFAULT_SLOW_WARNING)
    }
}

impl LifecycleController {
    pub fn new(warn_after: Duration) -> Self {
        Self {
            warn_after,
            attempt: RequestAttempt::idle(),
        }
    }

    /// Read-only view of the current attempt state.
    pub fn attempt(&self) -> &RequestAttempt {
        &self.attempt
    }

    /// Run `operation` to settlement.
    ///
    /// `on_warning` is invoked at most once, only while the operation is
    /// still pending past the threshold. `on_settled` is invoked exactly
    /// once on every path, after busy and warning have been cleared.
    /// Failures carry the classified message; the raw transport error never
    /// escapes the API layer.
    pub async fn run<T, F, W, S>(
        &mut self,
        operation: F,
        mut on_warning: W,
        on_settled: S,
    ) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
        W: FnMut(),
        S: FnOnce(),
    {
        self.attempt.begin();
        debug!("request attempt started");

        let mut operation = pin!(operation);
        let mut warning = pin!(sleep(self.warn_after));
        let mut warned = false;

        // The timer races the operation. Settlement exits the loop, which
        // drops the timer arm, so a warning can never land after a result.
        let result = loop {
            tokio::select! {
                _ = &mut warning, if !warned => {
                    warned = true;
                    self.attempt.slow_warning_active = true;
                    warn!(
                        elapsed_ms = self.attempt.elapsed().as_millis() as u64,
                        "request still pending past slow threshold"
                    );
                    on_warning();
                }
                result = &mut operation => break result,
            }
        };

        match &result {
            Ok(_) => debug!(
                elapsed_ms = self.attempt.elapsed().as_millis() as u64,
                "request attempt settled"
            ),
            Err(e) => warn!(
                elapsed_ms = self.attempt.elapsed().as_millis() as u64,
                kind = e.kind(),
                error = %e,
                "request attempt failed"
            ),
        }

        self.attempt
            .settle(result.as_ref().err().map(|e| e.to_string()));
        on_settled();

        result
    }
}

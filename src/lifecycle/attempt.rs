//! Per-attempt state tracked by the lifecycle controller.

use std::time::Duration;
use tokio::time::Instant;

/// Transient state for a single request attempt.
///
/// Mutated only by the controller; callers observe it read-only. The slow
/// warning can only be active while the attempt is busy, and settlement
/// clears both flags in the same step.
#[derive(Debug)]
pub struct RequestAttempt {
    pub(crate) started_at: Instant,
    pub(crate) busy: bool,
    pub(crate) slow_warning_active: bool,
    pub(crate) error: Option<String>,
}

impl RequestAttempt {
    pub(crate) fn idle() -> Self {
        Self {
            started_at: Instant::now(),
            busy: false,
            slow_warning_active: false,
            error: None,
        }
    }

    /// Reset for a fresh attempt: busy, no warning, previous error cleared.
    pub(crate) fn begin(&mut self) {
        self.started_at = Instant::now();
        self.busy = true;
        self.slow_warning_active = false;
        self.error = None;
    }

    /// Settle the attempt. Busy and warning drop together; the classified
    /// message, if any, persists until the next attempt begins.
    pub(crate) fn settle(&mut self, error: Option<String>) {
        self.busy = false;
        self.slow_warning_active = false;
        self.error = error;
    }

    /// True from invocation until the operation settles.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// True once the attempt has outlived the slow threshold, until settlement.
    pub fn slow_warning_active(&self) -> bool {
        self.slow_warning_active
    }

    /// Classified message from the most recent failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time since the current (or most recent) attempt began.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

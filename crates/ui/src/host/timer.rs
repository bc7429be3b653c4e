//! `setTimeout`-backed scheduler

use std::time::Duration;

use gloo_timers::callback::Timeout;
use projector_core::{Scheduler, Task};

/// Runs tasks on the browser's timer queue
///
/// Timeouts are forgotten once scheduled: they fire exactly once and are
/// never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

/// Milliseconds for `setTimeout`, saturating at `u32::MAX`
#[must_use]
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        Timeout::new(timeout_millis(delay), task).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_millis(150)), 150);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

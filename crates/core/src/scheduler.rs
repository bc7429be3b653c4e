//! Deferred task scheduling.
//!
//! Slot commits run after a fixed delay. The host supplies the timer (a
//! browser `setTimeout` in the UI crate); `ManualScheduler` runs tasks against
//! a virtual clock so tests can step through time without waiting.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A task run once when its delay elapses.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the host's task queue.
///
/// Scheduling is fire-and-forget: there is no handle and no cancellation.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-clock scheduler.
///
/// Clones share one queue. Tasks become due at `now + delay` and run in due
/// order, ties broken by submission order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Delays of the pending tasks relative to the current virtual time.
    #[must_use]
    pub fn pending_delays(&self) -> Vec<Duration> {
        let queue = self.queue.borrow();
        queue
            .pending
            .iter()
            .map(|p| p.due.saturating_sub(queue.now))
            .collect()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    ///
    /// Returns how many tasks ran. Tasks scheduled by running tasks also run if
    /// they fall due within the window.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        let mut ran: usize = 0;

        while let Some(next) = self.pop_due(target) {
            self.queue.borrow_mut().now = next.due;
            (next.task)();
            ran = ran.saturating_add(1);
        }

        self.queue.borrow_mut().now = target;
        ran
    }

    /// Run every pending task, however far in the future.
    pub fn run_all(&self) -> usize {
        let mut ran: usize = 0;
        while let Some(due) = self.next_due() {
            ran = ran.saturating_add(self.advance(due.saturating_sub(self.now())));
        }
        ran
    }

    fn next_due(&self) -> Option<Duration> {
        self.queue.borrow().pending.iter().map(|p| p.due).min()
    }

    // Releases the borrow before the task runs, so tasks may schedule more work.
    fn pop_due(&self, target: Duration) -> Option<PendingTask> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.pending.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now.saturating_add(delay);
        let seq = queue.next_seq;
        queue.next_seq = seq.saturating_add(1);
        queue.pending.push(PendingTask { due, seq, task });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

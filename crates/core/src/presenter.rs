//! Transitioned, delayed text updates for display slots.

use std::rc::Rc;
use std::time::Duration;

use crate::display::DisplaySurface;
use crate::scheduler::Scheduler;
use crate::tier::SlotKey;

/// What a call to [`ValuePresenter::present`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    /// Transition started, commit scheduled.
    Scheduled,
    /// Slot already shows the text; nothing happened.
    Unchanged,
    /// Slot does not exist; nothing happened.
    Missing,
}

/// Updates slot text through a short transition.
///
/// Each changed value starts the transition immediately and commits after
/// `delay`. Commits are never cancelled: if two updates for one slot overlap,
/// whichever commit runs last wins.
pub struct ValuePresenter<D, S> {
    display: Rc<D>,
    scheduler: S,
    delay: Duration,
}

impl<D, S> ValuePresenter<D, S>
where
    D: DisplaySurface + 'static,
    S: Scheduler,
{
    pub fn new(display: Rc<D>, scheduler: S, delay: Duration) -> Self {
        Self {
            display,
            scheduler,
            delay,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn display(&self) -> &Rc<D> {
        &self.display
    }

    /// Show `text` in `slot`.
    ///
    /// Compares against the text currently displayed, not against earlier
    /// requests, so a value still waiting on its commit is presented again.
    pub fn present(&self, slot: SlotKey, text: &str) -> PresentOutcome {
        let Some(current) = self.display.current_text(&slot) else {
            tracing::debug!(%slot, "display slot not found, skipping");
            return PresentOutcome::Missing;
        };

        if current == text {
            return PresentOutcome::Unchanged;
        }

        self.display.begin_transition(&slot);

        let display = Rc::clone(&self.display);
        let text = text.to_string();
        self.scheduler.schedule(
            self.delay,
            Box::new(move || display.commit(&slot, &text)),
        );

        PresentOutcome::Scheduled
    }
}

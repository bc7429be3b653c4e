//! Wires the spend input to the calculator.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::calculator::{RecomputeReport, RevenueCalculator};
use crate::display::DisplaySurface;
use crate::scheduler::Scheduler;
use crate::spend::AverageSpend;

/// Reads the raw text of the spend input.
pub trait SpendSource {
    /// Current raw value, or `None` if the input cannot be read.
    fn raw_value(&self) -> Option<String>;
}

impl<T: SpendSource + ?Sized> SpendSource for Rc<T> {
    fn raw_value(&self) -> Option<String> {
        (**self).raw_value()
    }
}

/// Spend source backed by a shared string.
///
/// Clones share the value, so a test can keep one handle and type into it.
#[derive(Debug, Clone, Default)]
pub struct FixedSpendSource {
    value: Rc<RefCell<Option<String>>>,
}

impl FixedSpendSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// A source whose input cannot be read.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, raw: impl Into<String>) {
        *self.value.borrow_mut() = Some(raw.into());
    }
}

impl SpendSource for FixedSpendSource {
    fn raw_value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

/// Interactions that trigger a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The page finished loading.
    Ready,
    /// The value is being edited (every keystroke).
    Changing,
    /// The value was committed (blur, enter, programmatic change).
    Committed,
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ready => "ready",
            Self::Changing => "input",
            Self::Committed => "change",
        })
    }
}

/// Recomputes on start and on every input interaction, without debouncing.
pub struct InputController<Src, D, S> {
    source: Src,
    calculator: RevenueCalculator<D, S>,
}

impl<Src, D, S> InputController<Src, D, S>
where
    Src: SpendSource,
    D: DisplaySurface + 'static,
    S: Scheduler,
{
    pub fn new(source: Src, calculator: RevenueCalculator<D, S>) -> Self {
        Self { source, calculator }
    }

    #[must_use]
    pub const fn calculator(&self) -> &RevenueCalculator<D, S> {
        &self.calculator
    }

    /// Initial recompute from whatever the input already holds.
    pub fn start(&self) -> RecomputeReport {
        self.handle(InputEvent::Ready)
    }

    /// Recompute from the input's current value.
    pub fn handle(&self, event: InputEvent) -> RecomputeReport {
        let raw = self.source.raw_value().unwrap_or_default();
        let spend = AverageSpend::parse(&raw);
        tracing::trace!(%event, raw = %raw, %spend, "spend input read");
        self.calculator.recompute(spend)
    }
}

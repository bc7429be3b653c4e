//! Drives every display slot from one spend value.

use std::rc::Rc;

use crate::config::ProjectorConfig;
use crate::currency::CurrencyFormatter;
use crate::display::DisplaySurface;
use crate::presenter::{PresentOutcome, ValuePresenter};
use crate::projection::project;
use crate::result::Result;
use crate::scheduler::Scheduler;
use crate::spend::AverageSpend;
use crate::tier::{Period, SlotKey, TierList};

/// Tally of presenter outcomes for one recompute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeReport {
    pub scheduled: usize,
    pub unchanged: usize,
    pub missing: usize,
}

impl RecomputeReport {
    fn record(&mut self, outcome: PresentOutcome) {
        match outcome {
            PresentOutcome::Scheduled => self.scheduled = self.scheduled.saturating_add(1),
            PresentOutcome::Unchanged => self.unchanged = self.unchanged.saturating_add(1),
            PresentOutcome::Missing => self.missing = self.missing.saturating_add(1),
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.scheduled
            .saturating_add(self.unchanged)
            .saturating_add(self.missing)
    }
}

/// Projects a spend through every tier and presents the formatted figures.
pub struct RevenueCalculator<D, S> {
    tiers: TierList,
    months_per_year: u32,
    formatter: CurrencyFormatter,
    presenter: ValuePresenter<D, S>,
}

impl<D, S> RevenueCalculator<D, S>
where
    D: DisplaySurface + 'static,
    S: Scheduler,
{
    pub fn new(
        tiers: TierList,
        months_per_year: u32,
        formatter: CurrencyFormatter,
        presenter: ValuePresenter<D, S>,
    ) -> Self {
        Self {
            tiers,
            months_per_year,
            formatter,
            presenter,
        }
    }

    /// Build a calculator from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration does not validate.
    pub fn from_config(config: &ProjectorConfig, display: Rc<D>, scheduler: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.tier_list()?,
            config.months_per_year,
            CurrencyFormatter::new(config.currency.clone()),
            ValuePresenter::new(display, scheduler, config.commit_delay()),
        ))
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierList {
        &self.tiers
    }

    #[must_use]
    pub const fn presenter(&self) -> &ValuePresenter<D, S> {
        &self.presenter
    }

    /// Present every tier's monthly then annual figure, tier by tier in list
    /// order.
    pub fn recompute(&self, spend: AverageSpend) -> RecomputeReport {
        let mut report = RecomputeReport::default();

        for projection in project(&self.tiers, spend, self.months_per_year) {
            for period in Period::ALL {
                let text = self.formatter.format(projection.figure(period));
                let slot = SlotKey::new(projection.tier, period);
                report.record(self.presenter.present(slot, &text));
            }
        }

        tracing::debug!(
            %spend,
            scheduled = report.scheduled,
            unchanged = report.unchanged,
            missing = report.missing,
            "recomputed revenue projections"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use super::*;
    use crate::display::MemoryDisplay;
    use crate::scheduler::ManualScheduler;
    use crate::tier::Tier;

    fn calculator() -> (RevenueCalculator<MemoryDisplay, ManualScheduler>, ManualScheduler) {
        let config = ProjectorConfig::default();
        let display = Rc::new(MemoryDisplay::with_slots(config.tier_list().unwrap().slots(), ""));
        let scheduler = ManualScheduler::new();
        let calculator = RevenueCalculator::from_config(&config, display, scheduler.clone()).unwrap();
        (calculator, scheduler)
    }

    fn text(calculator: &RevenueCalculator<MemoryDisplay, ManualScheduler>, tier: u32, period: Period) -> String {
        let slot = SlotKey::new(Tier::new(tier).unwrap(), period);
        calculator.presenter().display().text(&slot).unwrap()
    }

    #[test]
    fn test_recompute_updates_every_slot() {
        let (calculator, scheduler) = calculator();

        let report = calculator.recompute(AverageSpend::from_f64(10.0));
        assert_eq!(report, RecomputeReport { scheduled: 6, unchanged: 0, missing: 0 });
        assert_eq!(scheduler.pending(), 6);

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(text(&calculator, 100, Period::Monthly), "£1,000.00");
        assert_eq!(text(&calculator, 100, Period::Annual), "£12,000.00");
        assert_eq!(text(&calculator, 200, Period::Monthly), "£2,000.00");
        assert_eq!(text(&calculator, 200, Period::Annual), "£24,000.00");
        assert_eq!(text(&calculator, 300, Period::Monthly), "£3,000.00");
        assert_eq!(text(&calculator, 300, Period::Annual), "£36,000.00");
    }

    #[test]
    fn test_repeat_recompute_is_unchanged() {
        let (calculator, scheduler) = calculator();

        calculator.recompute(AverageSpend::from_f64(3.0));
        scheduler.advance(Duration::from_millis(150));

        let report = calculator.recompute(AverageSpend::from_f64(3.0));
        assert_eq!(report.unchanged, 6);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_missing_slots_are_counted_not_fatal() {
        let (calculator, scheduler) = calculator();
        let gone = SlotKey::annual(Tier::new(300).unwrap());
        calculator.presenter().display().remove(&gone);

        let report = calculator.recompute(AverageSpend::from_f64(1.0));
        assert_eq!(report, RecomputeReport { scheduled: 5, unchanged: 0, missing: 1 });
        assert_eq!(report.total(), 6);
        assert_eq!(scheduler.run_all(), 5);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ProjectorConfig::default().with_tiers(Vec::<u32>::new());
        let display = Rc::new(MemoryDisplay::new());
        assert!(RevenueCalculator::from_config(&config, display, ManualScheduler::new()).is_err());
    }
}

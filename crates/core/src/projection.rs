//! Revenue projection arithmetic.

use crate::spend::AverageSpend;
use crate::tier::{Period, Tier, TierList};

/// Monthly and annual revenue for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProjection {
    pub tier: Tier,
    pub monthly: f64,
    pub annual: f64,
}

impl TierProjection {
    /// Project `spend` through `tier`: monthly = tier × spend, annual =
    /// monthly × `months_per_year`.
    #[must_use]
    pub fn new(tier: Tier, spend: AverageSpend, months_per_year: u32) -> Self {
        let monthly = f64::from(tier.multiplier()) * spend.value();
        let annual = monthly * f64::from(months_per_year);
        Self {
            tier,
            monthly,
            annual,
        }
    }

    #[must_use]
    pub const fn figure(&self, period: Period) -> f64 {
        match period {
            Period::Monthly => self.monthly,
            Period::Annual => self.annual,
        }
    }
}

/// Projections for every tier, in list order.
///
/// A spend too large for the biggest annual figure to stay finite is
/// projected as zero, so every slot keeps annual = months × monthly.
#[must_use]
pub fn project(tiers: &TierList, spend: AverageSpend, months_per_year: u32) -> Vec<TierProjection> {
    let spend = bounded_spend(tiers, spend, months_per_year);
    tiers
        .iter()
        .map(|tier| TierProjection::new(tier, spend, months_per_year))
        .collect()
}

fn bounded_spend(tiers: &TierList, spend: AverageSpend, months_per_year: u32) -> AverageSpend {
    let largest = tiers.iter().map(Tier::multiplier).max().unwrap_or(0);
    let peak = f64::from(largest) * spend.value() * f64::from(months_per_year);
    if peak.is_finite() {
        spend
    } else {
        tracing::debug!(%spend, "spend out of range, projecting zero");
        AverageSpend::ZERO
    }
}

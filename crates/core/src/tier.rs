//! Tiers, periods and the display slot keys derived from them.

use std::fmt;

use crate::error::Error;
use crate::result::Result;

/// Multiplier applied to the average spend, one per pricing bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u32);

impl Tier {
    /// Creates a tier, rejecting a zero multiplier.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `multiplier` is zero.
    pub fn new(multiplier: u32) -> Result<Self> {
        if multiplier == 0 {
            return Err(Error::invalid_config("tier multiplier must be positive"));
        }
        Ok(Self(multiplier))
    }

    #[must_use]
    pub const fn multiplier(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of a tier's two figures a slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Monthly,
    Annual,
}

impl Period {
    pub const ALL: [Self; 2] = [Self::Monthly, Self::Annual];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite address of a display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub tier: Tier,
    pub period: Period,
}

impl SlotKey {
    #[must_use]
    pub const fn new(tier: Tier, period: Period) -> Self {
        Self { tier, period }
    }

    #[must_use]
    pub const fn monthly(tier: Tier) -> Self {
        Self::new(tier, Period::Monthly)
    }

    #[must_use]
    pub const fn annual(tier: Tier) -> Self {
        Self::new(tier, Period::Annual)
    }

    /// Value of the `data-tier` attribute that marks this slot in the page,
    /// e.g. `"200-annual"`.
    #[must_use]
    pub fn attribute_value(&self) -> String {
        format!("{}-{}", self.tier, self.period)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tier, self.period)
    }
}

/// Ordered, non-empty list of distinct tiers.
///
/// Order is the configured order and drives the order of display updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierList(Vec<Tier>);

impl TierList {
    /// Builds a tier list from raw multipliers.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the list is empty, contains a zero,
    /// or repeats a multiplier.
    pub fn new(multipliers: &[u32]) -> Result<Self> {
        if multipliers.is_empty() {
            return Err(Error::invalid_config("tier list is empty"));
        }

        let mut tiers: Vec<Tier> = Vec::with_capacity(multipliers.len());
        for &multiplier in multipliers {
            let tier = Tier::new(multiplier)?;
            if tiers.contains(&tier) {
                return Err(Error::invalid_config(format!(
                    "tier {multiplier} is listed more than once"
                )));
            }
            tiers.push(tier);
        }

        Ok(Self(tiers))
    }

    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every slot the list addresses, tier by tier, monthly before annual.
    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.iter()
            .flat_map(|tier| Period::ALL.into_iter().map(move |period| SlotKey::new(tier, period)))
    }
}

impl Default for TierList {
    fn default() -> Self {
        Self(vec![Tier(100), Tier(200), Tier(300)])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_tier_rejects_zero() {
        assert!(Tier::new(0).is_err());
        assert_eq!(Tier::new(5).map(Tier::multiplier), Ok(5));
    }

    #[test]
    fn test_slot_attribute_value() -> std::result::Result<(), String> {
        let tier = Tier::new(100).map_err(|e| e.to_string())?;
        assert_eq!(SlotKey::monthly(tier).attribute_value(), "100-monthly");
        assert_eq!(SlotKey::annual(tier).attribute_value(), "100-annual");
        Ok(())
    }

    #[test]
    fn test_tier_list_keeps_configured_order() {
        let list = TierList::new(&[300, 100, 200]).unwrap();
        let order: Vec<u32> = list.iter().map(Tier::multiplier).collect();
        assert_eq!(order, vec![300, 100, 200]);
    }

    #[test]
    fn test_tier_list_rejects_empty_and_duplicates() {
        assert!(TierList::new(&[]).is_err());
        assert!(TierList::new(&[100, 100]).is_err());
        assert!(TierList::new(&[100, 0]).is_err());
    }

    #[test]
    fn test_default_slots() {
        let keys: Vec<String> = TierList::default()
            .slots()
            .map(|slot| slot.attribute_value())
            .collect();
        assert_eq!(
            keys,
            vec![
                "100-monthly",
                "100-annual",
                "200-monthly",
                "200-annual",
                "300-monthly",
                "300-annual",
            ]
        );
    }
}

//! Reusable view components

pub mod tier_card;

pub use tier_card::TierCard;

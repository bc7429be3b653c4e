//! Revenue projection engine.
//!
//! Turns an average spend typed by the user into monthly and annual revenue
//! figures for a fixed list of tiers, and pushes the formatted figures into
//! display slots through a short delayed transition.
//!
//! ## Module Structure
//! - `tier`, `spend`, `projection`, `currency`: pure data and arithmetic
//! - `display`, `scheduler`: host seams for display slots and delayed tasks
//! - `presenter`, `calculator`, `controller`: the update cycle
//! - `contact`: the contact button's action
//! - `config`, `error`, `result`: configuration and error handling
//!
//! Every host seam has an in-memory implementation (`MemoryDisplay`,
//! `ManualScheduler`, `FixedSpendSource`, `RecordingNavigator`), so the whole
//! cycle runs without a browser.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod calculator;
pub mod config;
pub mod contact;
pub mod controller;
pub mod currency;
pub mod display;
pub mod error;
pub mod presenter;
pub mod projection;
pub mod result;
pub mod scheduler;
pub mod spend;
pub mod tier;
pub mod widget;

pub use calculator::{RecomputeReport, RevenueCalculator};
pub use config::ProjectorConfig;
pub use contact::{ContactAction, Navigator, RecordingNavigator};
pub use controller::{FixedSpendSource, InputController, InputEvent, SpendSource};
pub use currency::{CurrencyFormatter, CurrencyStyle};
pub use display::{DisplaySurface, MemoryDisplay};
pub use error::Error;
pub use presenter::{PresentOutcome, ValuePresenter};
pub use result::{Result, ResultExt};
pub use scheduler::{ManualScheduler, Scheduler, Task};
pub use spend::AverageSpend;
pub use tier::{Period, SlotKey, Tier, TierList};
pub use widget::Widget;

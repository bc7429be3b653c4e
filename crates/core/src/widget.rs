//! One-call assembly of the whole widget from configuration.

use std::rc::Rc;

use crate::calculator::RevenueCalculator;
use crate::config::ProjectorConfig;
use crate::contact::{ContactAction, Navigator};
use crate::controller::{InputController, SpendSource};
use crate::display::DisplaySurface;
use crate::result::Result;
use crate::scheduler::Scheduler;

/// The input controller and the contact action, built from one config.
pub struct Widget<Src, D, S, N> {
    pub controller: InputController<Src, D, S>,
    pub contact: ContactAction<N>,
}

impl<Src, D, S, N> Widget<Src, D, S, N>
where
    Src: SpendSource,
    D: DisplaySurface + 'static,
    S: Scheduler,
    N: Navigator,
{
    /// Validate `config` and wire the host seams into a widget.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration does not validate.
    pub fn build(
        config: &ProjectorConfig,
        source: Src,
        display: Rc<D>,
        scheduler: S,
        navigator: N,
    ) -> Result<Self> {
        let calculator = RevenueCalculator::from_config(config, display, scheduler)?;
        let contact = ContactAction::from_config(config, navigator)?;

        tracing::info!(
            tiers = calculator.tiers().len(),
            delay_ms = config.commit_delay_ms,
            input = %config.input_id,
            "revenue projector ready"
        );

        Ok(Self {
            controller: InputController::new(source, calculator),
            contact,
        })
    }
}

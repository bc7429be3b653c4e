//! Browser implementations of the projector's host seams
//!
//! - `dom`: display slots and the spend input, looked up in the live document
//! - `timer`: delayed commits on `setTimeout`
//! - `navigator`: the contact page via `window.open`

pub mod dom;
pub mod navigator;
pub mod timer;

use std::rc::Rc;

use projector_core::{ProjectorConfig, Widget};

pub use dom::{DomDisplay, InputElementSource};
pub use navigator::WindowNavigator;
pub use timer::TimeoutScheduler;

use crate::error::Result;

/// The projector widget wired to the browser
pub type BrowserWidget = Widget<InputElementSource, DomDisplay, TimeoutScheduler, WindowNavigator>;

/// Build the widget for the current page
///
/// # Errors
///
/// Returns `UiError::Config` if the configuration does not validate.
pub fn build_widget(config: &ProjectorConfig) -> Result<BrowserWidget> {
    let widget = Widget::build(
        config,
        InputElementSource::new(config.input_id.clone()),
        Rc::new(DomDisplay::new()),
        TimeoutScheduler,
        WindowNavigator,
    )?;
    Ok(widget)
}

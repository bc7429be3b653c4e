//! Main application component
//!
//! Renders the spend input, one card per tier and the contact button, then
//! hands the rendered page to the projector widget.

use std::rc::Rc;

use leptos::prelude::*;
use projector_core::{CurrencyFormatter, InputEvent, ProjectorConfig, ResultExt};

use crate::components::TierCard;
use crate::host::build_widget;
use crate::host::dom::embedded_config;

/// Id of the optional `<script type="application/toml">` holding settings
pub const CONFIG_ELEMENT_ID: &str = "projector-config";

/// Configuration embedded in the page, or the defaults
///
/// A malformed or invalid embedded configuration is logged and ignored.
#[must_use]
pub fn page_config() -> ProjectorConfig {
    embedded_config(CONFIG_ELEMENT_ID)
        .map(|text| ProjectorConfig::from_toml_str(&text).or_default_logged(ProjectorConfig::default()))
        .unwrap_or_default()
}

/// Main application component
///
/// Runs the initial recompute once the page is mounted, then recomputes on
/// every `input` and `change` event of the spend field.
#[component]
pub fn App() -> impl IntoView {
    let config = page_config();

    let widget = match build_widget(&config) {
        Ok(widget) => Rc::new(widget),
        Err(err) => {
            tracing::error!(error = %err, "revenue projector failed to start");
            return view! {
                <div class="projector-error">{format!("Projector unavailable: {err}")}</div>
            }
            .into_any();
        }
    };

    let initial = CurrencyFormatter::new(config.currency.clone()).format(0.0);
    let cards = widget
        .controller
        .calculator()
        .tiers()
        .iter()
        .map(|tier| view! { <TierCard tier=tier initial=initial.clone() /> })
        .collect_view();

    let on_input = {
        let widget = Rc::clone(&widget);
        move |_| {
            widget.controller.handle(InputEvent::Changing);
        }
    };

    let on_change = {
        let widget = Rc::clone(&widget);
        move |_| {
            widget.controller.handle(InputEvent::Committed);
        }
    };

    let on_contact = {
        let widget = Rc::clone(&widget);
        move |_| widget.contact.open()
    };

    // Effects run after the first render, so the slots exist by now.
    Effect::new(move |_| {
        widget.controller.start();
    });

    view! {
        <div class="projector">
            <label class="spend-label" for=config.input_id.clone()>"Average spend per cover"</label>
            <input
                id=config.input_id.clone()
                class="spend-input"
                type="number"
                min="0"
                step="0.01"
                placeholder="0.00"
                on:input=on_input
                on:change=on_change
            />
            <div class="tier-grid">{cards}</div>
            <button class="contact-button" on:click=on_contact>"Talk to our team"</button>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}

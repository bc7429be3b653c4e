//! DOM-backed display slots and spend input
//!
//! Slots are found by their `data-tier` attribute on every call, the same
//! way the page markup addresses them, so a slot removed from the page is
//! skipped rather than written to.

use projector_core::{DisplaySurface, SlotKey, SpendSource};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::error::{Result, UiError};

/// Attribute carrying a slot's `"{tier}-{period}"` address
pub const SLOT_ATTRIBUTE: &str = "data-tier";

/// Inline styles applied while a slot is between values
pub const TRANSITION_STYLE: [(&str, &str); 3] = [
    ("opacity", "0.6"),
    ("transform", "scale(0.95)"),
    ("transition", "all 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)"),
];

/// Inline styles restored when the new value lands
pub const RESTING_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "scale(1)")];

/// CSS selector matching a slot's element
#[must_use]
pub fn slot_selector(slot: &SlotKey) -> String {
    format!("[{SLOT_ATTRIBUTE}=\"{}\"]", slot.attribute_value())
}

fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(UiError::WindowNotAvailable)?
        .document()
        .ok_or(UiError::DocumentNotAvailable)
}

fn find_slot(slot: &SlotKey) -> Result<HtmlElement> {
    let selector = slot_selector(slot);
    document()?
        .query_selector(&selector)
        .map_err(|e| UiError::Dom(format!("{e:?}")))?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(UiError::ElementNotFound { selector })
}

fn apply_style(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<()> {
    let style = element.style();
    for (name, value) in properties {
        style
            .set_property(name, value)
            .map_err(|e| UiError::Dom(format!("failed to set {name}: {e:?}")))?;
    }
    Ok(())
}

/// Display surface over the live document
#[derive(Debug, Clone, Copy, Default)]
pub struct DomDisplay;

impl DomDisplay {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn with_slot(slot: &SlotKey, write: impl FnOnce(&HtmlElement) -> Result<()>) {
        let outcome = find_slot(slot).and_then(|element| write(&element));
        if let Err(e) = outcome {
            tracing::debug!(%slot, error = %e, "slot write skipped");
        }
    }
}

impl DisplaySurface for DomDisplay {
    fn current_text(&self, slot: &SlotKey) -> Option<String> {
        find_slot(slot)
            .map(|element| element.text_content().unwrap_or_default())
            .ok()
    }

    fn begin_transition(&self, slot: &SlotKey) {
        Self::with_slot(slot, |element| apply_style(element, &TRANSITION_STYLE));
    }

    fn commit(&self, slot: &SlotKey, text: &str) {
        Self::with_slot(slot, |element| {
            element.set_text_content(Some(text));
            apply_style(element, &RESTING_STYLE)
        });
    }
}

/// Text of the page's embedded configuration element, if present
///
/// Hosts may ship `<script type="application/toml" id="...">` with
/// projector settings alongside the markup.
#[must_use]
pub fn embedded_config(id: &str) -> Option<String> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Spend source reading an `<input>` by element id
#[derive(Debug, Clone)]
pub struct InputElementSource {
    id: String,
}

impl InputElementSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    fn element(&self) -> Result<HtmlInputElement> {
        document()?
            .get_element_by_id(&self.id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| UiError::ElementNotFound {
                selector: format!("#{}", self.id),
            })
    }
}

impl SpendSource for InputElementSource {
    fn raw_value(&self) -> Option<String> {
        self.element()
            .map(|input| input.value())
            .inspect_err(|e| tracing::debug!(error = %e, "spend input unreadable"))
            .ok()
    }
}

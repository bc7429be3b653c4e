//! Card showing one tier's monthly and annual projections

use leptos::prelude::*;
use projector_core::{Period, SlotKey, Tier};

use crate::host::dom::SLOT_ATTRIBUTE;

/// Heading shown above a tier's figures
#[must_use]
pub fn tier_heading(tier: Tier) -> String {
    format!("{tier} × average spend")
}

/// Label shown next to a figure
#[must_use]
pub const fn period_label(period: Period) -> &'static str {
    match period {
        Period::Monthly => "Monthly revenue",
        Period::Annual => "Annual revenue",
    }
}

/// TierCard component - renders a tier's two display slots
///
/// The value spans are plain text nodes tagged with `data-tier`; the DOM
/// display surface rewrites them in place, outside Leptos' reactive graph.
#[component]
pub fn TierCard(tier: Tier, #[prop(into)] initial: String) -> impl IntoView {
    let figures = Period::ALL
        .into_iter()
        .map(|period| {
            let address = SlotKey::new(tier, period).attribute_value();
            view! {
                <div class="tier-figure">
                    <span class="tier-period">{period_label(period)}</span>
                    <span class="tier-value" data-tier=address>{initial.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tier-card">
            <h3 class="tier-heading">{tier_heading(tier)}</h3>
            {figures}
        </div>
    }
}

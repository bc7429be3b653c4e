//! Leptos 0.7 CSR frontend for the revenue projector
//!
//! Renders the average-spend input, the tier cards and the contact button,
//! and plugs the browser into the projector core's host seams.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Slot text is written straight to the DOM by `host::dom`, addressed by
//!   `data-tier`, with delayed commits on `setTimeout`
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `components`: Tier cards
//! - `host`: DOM, timer and navigation implementations of the core seams
//! - `logging`: `tracing` events forwarded to the browser console
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod host;
pub mod logging;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

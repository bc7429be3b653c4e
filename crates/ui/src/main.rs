//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It installs console logging and mounts the App component to the body.

use leptos::prelude::*;
use projector_ui::App;
use projector_ui::logging;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    logging::init(logging::default_level());

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}

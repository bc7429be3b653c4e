//! Opening the contact page with `window.open`

use projector_core::{Error, Navigator};
use url::Url;

/// Browsing context name that always opens a new tab or window
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Navigator over `window.open`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open_new_context(&self, url: &Url) -> projector_core::Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| Error::navigation_failed(url.as_str(), "window is not available"))?;

        match window.open_with_url_and_target(url.as_str(), NEW_CONTEXT_TARGET) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(Error::navigation_failed(url.as_str(), "blocked by the browser")),
            Err(e) => Err(Error::navigation_failed(url.as_str(), format!("{e:?}"))),
        }
    }
}

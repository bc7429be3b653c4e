//! The contact button's action.

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::config::ProjectorConfig;
use crate::error::Error;
use crate::result::Result;

/// Opens addresses in a new browsing context.
pub trait Navigator {
    /// Open `url` in a new tab or window.
    ///
    /// # Errors
    ///
    /// Returns `Error::NavigationFailed` if the host refuses.
    fn open_new_context(&self, url: &Url) -> Result<()>;
}

/// Navigator that records requests instead of opening anything.
///
/// Clones share one log. `failing()` rejects every request, as a browser with
/// a popup blocker would.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    opened: Rc<RefCell<Vec<Url>>>,
    fail: bool,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Addresses requested so far, including refused ones.
    #[must_use]
    pub fn opened(&self) -> Vec<Url> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_new_context(&self, url: &Url) -> Result<()> {
        self.opened.borrow_mut().push(url.clone());
        if self.fail {
            return Err(Error::navigation_failed(url.as_str(), "blocked"));
        }
        Ok(())
    }
}

/// Opens the one configured contact address.
#[derive(Debug, Clone)]
pub struct ContactAction<N> {
    url: Url,
    navigator: N,
}

impl<N: Navigator> ContactAction<N> {
    pub fn new(url: Url, navigator: N) -> Self {
        Self { url, navigator }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configured address is unusable.
    pub fn from_config(config: &ProjectorConfig, navigator: N) -> Result<Self> {
        Ok(Self::new(config.contact_url()?, navigator))
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Open the contact address. Failures are logged and dropped.
    pub fn open(&self) {
        match self.navigator.open_new_context(&self.url) {
            Ok(()) => tracing::debug!(url = %self.url, "opened contact page"),
            Err(e) => tracing::warn!(error = %e, "contact page did not open"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::DEFAULT_CONTACT_URL;

    #[test]
    fn test_open_targets_configured_address() {
        let navigator = RecordingNavigator::new();
        let action = ContactAction::from_config(&ProjectorConfig::default(), navigator.clone()).unwrap();

        action.open();
        action.open();

        let opened: Vec<String> = navigator.opened().iter().map(ToString::to_string).collect();
        assert_eq!(opened, vec![DEFAULT_CONTACT_URL, DEFAULT_CONTACT_URL]);
    }

    #[test]
    fn test_refused_navigation_is_swallowed() {
        let navigator = RecordingNavigator::failing();
        let action = ContactAction::from_config(&ProjectorConfig::default(), navigator.clone()).unwrap();

        action.open();
        assert_eq!(navigator.opened().len(), 1);
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = ProjectorConfig::default().with_contact_url("mailto:sales@example.com");
        assert!(ContactAction::from_config(&config, RecordingNavigator::new()).is_err());
    }
}

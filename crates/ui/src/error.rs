//! Error types for the browser host
//!
//! DOM lookups and style writes return these errors; the display surface
//! turns them into "slot not found" so the update cycle never stops on them.

/// Errors that can occur while talking to the browser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` (not running in a browser)
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// No `document` on the window
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Selector matched nothing, or matched an element of the wrong kind
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration rejected by the projector core
    #[error(transparent)]
    Config(#[from] projector_core::Error),
}

/// Result type alias for browser host operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::ElementNotFound {
            selector: "[data-tier=\"100-monthly\"]".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "element not found: [data-tier=\"100-monthly\"]"
        );

        let error = UiError::Dom("SyntaxError".to_string());
        assert_eq!(error.to_string(), "DOM operation failed: SyntaxError");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let core = projector_core::Error::invalid_config("tier list is empty");
        let error = UiError::from(core.clone());
        assert_eq!(error.to_string(), core.to_string());
    }
}

//! Core error types for the projection engine.
//!
//! The update cycle itself never fails: bad input degrades to zero and missing
//! display targets are skipped. Errors only arise while loading configuration
//! or when the host refuses to open the contact address.

use thiserror::Error;

/// Core error type for projector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("TOML parse error: {reason}")]
    ConfigParseFailed { reason: String },

    // Host errors
    #[error("failed to open '{url}': {reason}")]
    NavigationFailed { url: String, reason: String },
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a configuration parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a navigation error.
    pub fn navigation_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NavigationFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

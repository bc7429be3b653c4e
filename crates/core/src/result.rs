//! Result type definition and logging extensions.
//!
//! Fire-and-forget paths (opening the contact page, reading optional config)
//! use these combinators to drop an error after logging it instead of
//! unwrapping.

use crate::error::Error;

/// The standard Result type for projector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged conversions for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<u32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<u32> = Err(Error::invalid_config("bad"));
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged() {
        let ok: Result<u32> = Ok(7);
        assert_eq!(ok.or_default_logged(0), 7);

        let err: Result<u32> = Err(Error::config_parse_failed("eof"));
        assert_eq!(err.or_default_logged(3), 3);
    }
}

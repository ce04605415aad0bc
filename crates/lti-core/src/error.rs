//! Error types for the LTI core library.
//!
//! The classification operations themselves never fail: malformed dates,
//! missing fields and half-populated meetings all degrade to defaults. The
//! variants here cover the edges of the engine, namely decoding a store
//! snapshot and building a custom id classifier.

/// Errors that can occur at the edges of the LTI engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An id classifier pattern could not be compiled
    #[error("Invalid id pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A store key holds a value of the wrong shape
    #[error("Store key '{key}' is malformed: {message}")]
    Store {
        /// Key whose value could not be decoded
        key: String,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for LTI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new store error for the given key.
    pub fn store<K, M>(key: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<String>,
    {
        Error::Store {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = Error::store("savedMeetings", "expected an array");
        assert_eq!(
            err.to_string(),
            "Store key 'savedMeetings' is malformed: expected an array"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("id prefix must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: id prefix must not be empty"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = serde_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}

//! Error types for lti-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for lti-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lti-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the engine
    #[error("Core error: {0}")]
    Core(#[from] lti_core::Error),

    /// File system error at a known path
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file did not parse
    #[error("Invalid configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Configuration could not be rendered
    #[error("Could not render configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Report could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line value was not usable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}

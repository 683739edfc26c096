//! Error types for bearing-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for bearing-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bearing-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from bearing-core
    #[error("{0}")]
    Core(#[from] bearing_core::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// File I/O error with the path involved
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Writing the result to stdout failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error that remembers the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

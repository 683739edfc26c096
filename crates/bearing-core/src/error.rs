//! Error types for bearing-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for bearing-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bearing-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The record store could not be opened.
    #[error("Record store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading an already opened store.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The store could not be parsed as a JSON document.
    #[error("Malformed record store {}: {source}", path.display())]
    MalformedStore {
        /// Path being parsed
        path: PathBuf,
        /// Parser failure
        #[source]
        source: serde_json::Error,
    },

    /// A query dimension is not a number.
    #[error("Invalid {dimension} value: '{value}'")]
    InvalidDimension {
        /// Which dimension was rejected
        dimension: &'static str,
        /// Raw text supplied
        value: String,
    },

    /// Configuration or option error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a store-unavailable error for `path`.
    pub fn store_unavailable(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::StoreUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an I/O error that remembers the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether the error originates from the record store itself
    /// rather than from the caller's input or options.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Error::StoreUnavailable { .. } | Error::Io { .. } | Error::MalformedStore { .. }
        )
    }

    /// Returns whether the error is caused by the query text.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidDimension { .. })
    }
}

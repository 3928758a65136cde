//! Errors surfaced by the jokepager binary.

use thiserror::Error;

use crate::jokes::FetchError;

/// Errors that end a jokepager run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration could not be loaded or is out of range.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI could not start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail reported by the TUI runtime.
        message: String,
    },

    /// Fetching a page of jokes failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The requested page number was rejected.
    #[error("invalid page: {message}")]
    InvalidPage {
        /// Validation message describing the accepted range.
        message: String,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

//! Error types exposed by the joke data source layer.

use thiserror::Error;

/// Errors surfaced while fetching a page of jokes.
///
/// A page that exists but contains no jokes is not an error; it is returned
/// as an empty [`PageResult`](super::PageResult).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Networking failed or the request timed out.
    #[error("network error fetching jokes: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The remote service answered with a non-success status.
    #[error("joke service returned {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body did not match the expected page shape.
    #[error("joke page could not be decoded: {message}")]
    Parse {
        /// Decoder or invariant violation detail.
        message: String,
    },

    /// The data source could not be constructed or is not available.
    #[error("joke source is not configured: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

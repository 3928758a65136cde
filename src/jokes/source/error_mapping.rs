//! Error mapping helpers for the HTTP joke source.

use http::StatusCode;

use crate::jokes::error::FetchError;

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> FetchError {
    if error.is_decode() {
        return FetchError::Parse {
            message: format!("{operation} body could not be read: {error}"),
        };
    }

    if error.is_timeout() {
        return FetchError::Network {
            message: format!("{operation} timed out: {error}"),
        };
    }

    FetchError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(status: StatusCode, maybe_message: Option<String>) -> FetchError {
    let message = maybe_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });

    FetchError::Api {
        status: status.as_u16(),
        message,
    }
}

pub(super) fn map_decode_error(error: &serde_json::Error) -> FetchError {
    FetchError::Parse {
        message: format!("joke page deserialisation failed: {error}"),
    }
}

//! Shared HTTP utilities for the joke source.

const MAX_MESSAGE_CHARS: usize = 160;

/// Pulls a human-readable message out of an error response body.
///
/// JSON bodies contribute their `message` field; other non-empty bodies are
/// truncated and returned verbatim.
pub(super) fn extract_service_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_for_message(trimmed, MAX_MESSAGE_CHARS))
    }
}

pub(super) fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut chars = message.chars();
    let mut output: String = chars.by_ref().take(max_chars).collect();

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

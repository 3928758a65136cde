//! Wiremock stand-in for the joke search endpoint.

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the stub search endpoint is mounted at.
pub const SEARCH_PATH: &str = "/search";

/// Returns the search endpoint URL on `server`.
pub fn search_url(server: &MockServer) -> String {
    format!("{}{SEARCH_PATH}", server.uri())
}

/// Builds a search response body for `page` of `total` pages.
pub fn page_body(page: u32, total: u32) -> Value {
    json!({
        "current_page": page,
        "total_pages": total,
        "results": [
            { "id": format!("p{page}-a"), "joke": format!("First joke on page {page}") },
            { "id": format!("p{page}-b"), "joke": format!("Second joke on page {page}") }
        ]
    })
}

/// Mounts one responder per page; `failing` pages answer 503.
pub async fn mount_pages(server: &MockServer, total: u32, failing: Option<u32>) {
    for page in 1..=total {
        let response = if failing == Some(page) {
            ResponseTemplate::new(503).set_body_json(json!({ "message": "service unavailable" }))
        } else {
            ResponseTemplate::new(200).set_body_json(page_body(page, total))
        };

        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

/// Counts the requests `server` received for `page`.
pub async fn requests_for_page(server: &MockServer, page: u32) -> usize {
    let expected = page.to_string();
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| {
            request
                .url
                .query_pairs()
                .any(|(key, value)| key == "page" && value == expected.as_str())
        })
        .count()
}

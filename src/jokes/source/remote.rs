//! reqwest-backed implementation of [`JokeSource`].

use async_trait::async_trait;
use http::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::jokes::error::FetchError;
use crate::jokes::models::{ApiJokePage, PageResult};
use crate::jokes::pagination::PageNumber;

use super::error_mapping::{map_decode_error, map_http_error, map_transport_error};
use super::http_utils::extract_service_message;
use super::{JokeSource, SourceSettings};

/// Joke source that queries the remote search endpoint over HTTP.
///
/// Every call issues a request; wrap it in
/// [`CachingJokeSource`](super::CachingJokeSource) to reuse fetched pages.
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: Client,
    endpoint: Url,
    per_page: u8,
}

impl HttpJokeSource {
    /// Builds a source from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the base URL does not parse
    /// or the HTTP client cannot be constructed.
    pub fn new(settings: &SourceSettings) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&settings.base_url).map_err(|error| FetchError::Configuration {
            message: format!("invalid base URL '{}': {error}", settings.base_url),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|error| FetchError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            per_page: settings.per_page,
        })
    }

    /// Returns the request URL for `page`.
    #[must_use]
    pub fn page_url(&self, page: PageNumber) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &self.per_page.to_string());
        url
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch_page(&self, page: PageNumber) -> Result<PageResult, FetchError> {
        let url = self.page_url(page);
        tracing::debug!(page = page.get(), %url, "requesting joke page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error("joke page request", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = map_http_error(status, extract_service_message(&body));
            tracing::warn!(page = page.get(), "joke page request failed: {error}");
            return Err(error);
        }

        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error("joke page response", &error))?;

        decode_page(&body)
    }
}

/// Decodes a search response body into a [`PageResult`].
pub(super) fn decode_page(body: &str) -> Result<PageResult, FetchError> {
    let api: ApiJokePage = serde_json::from_str(body).map_err(|error| map_decode_error(&error))?;
    PageResult::try_from(api)
}

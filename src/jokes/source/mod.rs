//! Data sources that load pages of jokes.
//!
//! [`JokeSource`] is the single contract the controller's callers fetch
//! through. [`HttpJokeSource`] talks to the remote search endpoint and
//! [`CachingJokeSource`] wraps any source with a session-lifetime page cache.

mod caching;
mod error_mapping;
mod http_utils;
mod remote;

use std::time::Duration;

use async_trait::async_trait;

pub use caching::{CachingJokeSource, DEFAULT_CACHE_CAPACITY};
pub use remote::HttpJokeSource;

use super::error::FetchError;
use super::models::PageResult;
use super::pagination::PageNumber;

/// Default search endpoint of the joke service.
pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com/search";
/// Default number of jokes requested per page.
pub const DEFAULT_PER_PAGE: u8 = 20;
/// Default HTTP timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Source that can load a page of jokes.
///
/// Implementations must resolve the same page number to the same payload for
/// the lifetime of a session. Out-of-range pages resolve to whatever the
/// remote service answers; callers do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one page of jokes.
    async fn fetch_page(&self, page: PageNumber) -> Result<PageResult, FetchError>;
}

/// Settings for [`HttpJokeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Search endpoint URL; any query it already carries is preserved.
    pub base_url: String,
    /// Jokes requested per page.
    pub per_page: u8,
    /// HTTP timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

/// Returns the `User-Agent` sent when none is configured.
#[must_use]
pub fn default_user_agent() -> String {
    concat!("jokepager/", env!("CARGO_PKG_VERSION")).to_owned()
}

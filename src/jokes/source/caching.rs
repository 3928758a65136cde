//! In-memory page cache in front of another [`JokeSource`].

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use crate::jokes::error::FetchError;
use crate::jokes::models::PageResult;
use crate::jokes::pagination::PageNumber;

use super::JokeSource;

/// Default number of pages kept in the cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 128;

/// Joke source that remembers every page it has successfully fetched.
///
/// The collection is treated as immutable for the session, so cached pages
/// never expire; they are only evicted once `capacity` is exceeded.
/// Concurrent requests for the same page share one upstream fetch. Failures
/// are not cached, so a later request for the page tries again.
pub struct CachingJokeSource<S> {
    inner: Arc<S>,
    cache: Cache<PageNumber, PageResult>,
}

impl<S: JokeSource> CachingJokeSource<S> {
    /// Wraps `inner` with a cache holding up to `capacity` pages.
    #[must_use]
    pub fn new(inner: S, capacity: u64) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: Cache::new(capacity),
        }
    }

    /// Returns true if `page` is currently cached.
    #[must_use]
    pub(crate) fn contains(&self, page: PageNumber) -> bool {
        self.cache.contains_key(&page)
    }
}

#[async_trait]
impl<S: JokeSource> JokeSource for CachingJokeSource<S> {
    async fn fetch_page(&self, page: PageNumber) -> Result<PageResult, FetchError> {
        let inner = Arc::clone(&self.inner);
        let entry = self
            .cache
            .entry(page)
            .or_try_insert_with(async move { inner.fetch_page(page).await })
            .await
            .map_err(|error| (*error).clone())?;

        if !entry.is_fresh() {
            tracing::debug!(page = page.get(), "serving joke page from cache");
        }

        Ok(entry.into_value())
    }
}

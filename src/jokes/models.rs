//! Domain models for pages of jokes and their wire representations.

use serde::Deserialize;

use super::error::FetchError;
use super::pagination::{PageInfo, PageNumber};
use super::sanitize::sanitize_text;

/// A single joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    /// Stable identifier, used as the rendering key.
    pub id: String,
    /// Joke text.
    pub text: String,
}

/// One page of the remote joke collection.
///
/// Results are immutable once received; the controller derives its current
/// and total page from here rather than tracking them separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    page_info: PageInfo,
    items: Vec<Joke>,
}

impl PageResult {
    /// Creates a page result.
    #[must_use]
    pub const fn new(page_info: PageInfo, items: Vec<Joke>) -> Self {
        Self { page_info, items }
    }

    /// Returns the pagination metadata.
    #[must_use]
    pub const fn page_info(&self) -> PageInfo {
        self.page_info
    }

    /// Returns the page the server returned.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.page_info.current_page()
    }

    /// Returns the total number of pages in the collection.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.page_info.total_pages()
    }

    /// Returns the jokes on this page, in server order.
    #[must_use]
    pub fn items(&self) -> &[Joke] {
        &self.items
    }
}

/// Joke page as returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiJokePage {
    pub(crate) current_page: u32,
    pub(crate) total_pages: u32,
    #[serde(default)]
    pub(crate) results: Vec<ApiJoke>,
}

/// Joke entry as returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiJoke {
    pub(crate) id: String,
    pub(crate) joke: String,
}

impl TryFrom<ApiJoke> for Joke {
    type Error = FetchError;

    fn try_from(api: ApiJoke) -> Result<Self, Self::Error> {
        if api.id.trim().is_empty() {
            return Err(FetchError::Parse {
                message: "joke is missing its id".to_owned(),
            });
        }

        Ok(Self {
            id: api.id,
            text: sanitize_text(&api.joke),
        })
    }
}

impl TryFrom<ApiJokePage> for PageResult {
    type Error = FetchError;

    fn try_from(api: ApiJokePage) -> Result<Self, Self::Error> {
        let current_page = PageNumber::new(api.current_page).ok_or_else(|| FetchError::Parse {
            message: "current_page must be at least 1".to_owned(),
        })?;

        let items = api
            .results
            .into_iter()
            .map(Joke::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(PageInfo::new(current_page, api.total_pages), items))
    }
}

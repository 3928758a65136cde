//! Page numbers and pagination metadata for the joke collection.
//!
//! The remote collection is 1-based. [`PageNumber`] makes page zero
//! unrepresentable, and [`PageInfo`] captures the server's authoritative view
//! of where a page sits within the collection.

use std::fmt;
use std::num::NonZeroU32;

/// A 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page of every collection.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }

    /// Returns the page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following page, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the preceding page, or `None` when already on the first page.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        Self::new(self.get().saturating_sub(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Position of a page within the paginated collection.
///
/// # Example
///
/// ```
/// use jokepager::jokes::{PageInfo, PageNumber};
///
/// let page = PageNumber::new(2).expect("two is a valid page");
/// let info = PageInfo::new(page, 5);
/// assert!(info.has_prev());
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Page the server says it returned.
    current_page: PageNumber,
    /// Total number of pages in the collection; zero when it is empty.
    total_pages: u32,
}

impl PageInfo {
    /// Creates page info from the server's pagination metadata.
    #[must_use]
    pub const fn new(current_page: PageNumber, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page.get() > 1
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page.get() < self.total_pages
    }
}

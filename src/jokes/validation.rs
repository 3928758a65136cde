//! Validation of user-supplied page numbers.
//!
//! User input arrives as free text. [`parse_page_input`] normalises it to an
//! optional integer (`None` stands in for "not a number"), and
//! [`page_input_has_error`] checks that integer against the known bounds.
//! Both are pure and never panic.

use thiserror::Error;

use super::pagination::PageNumber;

/// Reasons a page request typed by the user is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PageInputError {
    /// The input is empty or not an integer.
    #[error("input must be a whole number")]
    NotANumber,

    /// No page has loaded yet, so the valid range is unknown.
    #[error("page count is not known yet")]
    BoundsUnknown,

    /// The number lies outside `1..=total_pages`.
    #[error("input must be a number between 1 and {total_pages} (inclusive)")]
    OutOfRange {
        /// Total number of pages in the collection.
        total_pages: u32,
    },
}

/// Normalises raw user text into a candidate page number.
///
/// Surrounding whitespace is ignored. Empty or non-integer text yields
/// `None`.
#[must_use]
pub fn parse_page_input(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Returns `true` when `candidate` is not a valid page for `total_pages`.
///
/// A missing candidate or unknown bound is always an error.
///
/// # Example
///
/// ```
/// use jokepager::jokes::page_input_has_error;
///
/// assert!(!page_input_has_error(Some(3), Some(5)));
/// assert!(page_input_has_error(Some(7), Some(5)));
/// assert!(page_input_has_error(Some(1), None));
/// assert!(page_input_has_error(None, Some(5)));
/// ```
#[must_use]
pub fn page_input_has_error(candidate: Option<i64>, total_pages: Option<u32>) -> bool {
    check_candidate(candidate, total_pages).is_err()
}

/// Parses and validates user text in one step.
///
/// # Errors
///
/// Returns a [`PageInputError`] describing why the text is not a page within
/// `1..=total_pages`.
pub fn validate_page_input(
    text: &str,
    total_pages: Option<u32>,
) -> Result<PageNumber, PageInputError> {
    check_candidate(parse_page_input(text), total_pages)
}

fn check_candidate(
    candidate: Option<i64>,
    total_pages: Option<u32>,
) -> Result<PageNumber, PageInputError> {
    let value = candidate.ok_or(PageInputError::NotANumber)?;
    let total = total_pages.ok_or(PageInputError::BoundsUnknown)?;

    if value < 1 || value > i64::from(total) {
        return Err(PageInputError::OutOfRange { total_pages: total });
    }

    u32::try_from(value)
        .ok()
        .and_then(PageNumber::new)
        .ok_or(PageInputError::OutOfRange { total_pages: total })
}

//! Page cursor controller for the paginated joke collection.
//!
//! [`PageController`] is a synchronous state machine. It never performs I/O
//! itself: each accepted page change returns a [`FetchTicket`], the caller
//! runs the fetch however it likes, and hands the outcome back through
//! [`PageController::on_fetch_resolved`]. Outcomes for superseded tickets
//! are discarded, so the visible state always reflects the most recent
//! request.
//!
//! # Example
//!
//! ```
//! use jokepager::controller::{PageController, Resolution};
//! use jokepager::jokes::{Joke, PageInfo, PageResult};
//!
//! let (mut controller, ticket) = PageController::mount();
//! assert!(controller.is_loading());
//!
//! let page = PageResult::new(
//!     PageInfo::new(ticket.page(), 3),
//!     vec![Joke { id: "a".to_owned(), text: "x".to_owned() }],
//! );
//! assert_eq!(controller.on_fetch_resolved(ticket, Ok(page)), Resolution::Applied);
//! assert!(!controller.is_loading());
//! assert!(controller.can_go_next());
//! ```

mod state;

pub use state::{ControllerState, DisplayState, FetchTicket, Phase, RequestToken, Resolution};

use crate::jokes::{FetchError, Joke, PageNumber, PageResult, validate_page_input};

/// Owns the page cursor and the state derived from fetching it.
#[derive(Debug, Clone)]
pub struct PageController {
    state: ControllerState,
    last_token: RequestToken,
}

impl PageController {
    /// Creates a controller with the initial fetch for page 1 in flight.
    ///
    /// The returned ticket must be fetched and resolved by the caller.
    #[must_use]
    pub fn mount() -> (Self, FetchTicket) {
        let token = RequestToken::first();
        let ticket = FetchTicket::new(PageNumber::FIRST, token);
        tracing::debug!(page = ticket.page().get(), "mounting page controller");
        let controller = Self {
            state: ControllerState::mounting(ticket),
            last_token: token,
        };
        (controller, ticket)
    }

    /// Returns a snapshot reference to the full controller state.
    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Returns the most recently requested page.
    #[must_use]
    pub const fn requested_page(&self) -> PageNumber {
        self.state.requested_page
    }

    /// Returns the page number text typed but not yet submitted.
    #[must_use]
    pub fn pending_user_text(&self) -> &str {
        &self.state.pending_user_text
    }

    /// Returns true if the last submit was rejected by validation.
    #[must_use]
    pub const fn validation_error(&self) -> bool {
        self.state.validation_error
    }

    /// Returns true while the authoritative fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns the error of the last authoritative fetch, if it failed.
    #[must_use]
    pub const fn fetch_error(&self) -> Option<&FetchError> {
        match &self.state.phase {
            Phase::Failed { error } => Some(error),
            Phase::Loading { .. } | Phase::Idle => None,
        }
    }

    /// Returns the displayed page, if any page has loaded.
    #[must_use]
    pub const fn result(&self) -> Option<&PageResult> {
        self.state.result.as_ref()
    }

    /// Returns the displayed page number, as reported by the server.
    #[must_use]
    pub fn current_page(&self) -> Option<PageNumber> {
        self.result().map(PageResult::current_page)
    }

    /// Returns the total page count, as reported by the server.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.result().map(PageResult::total_pages)
    }

    /// Returns the jokes of the displayed page.
    #[must_use]
    pub fn items(&self) -> &[Joke] {
        self.result().map(PageResult::items).unwrap_or_default()
    }

    /// Returns what the display layer should render.
    #[must_use]
    pub fn display(&self) -> DisplayState<'_> {
        DisplayState {
            items: self.items(),
            is_loading: self.is_loading(),
        }
    }

    /// Returns true when a previous page exists; backs [`Self::on_prev`].
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.result().is_some_and(|result| result.page_info().has_prev())
    }

    /// Returns true when a following page exists; backs [`Self::on_next`].
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.result().is_some_and(|result| result.page_info().has_next())
    }

    /// Returns true when there is text to submit.
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        !self.state.pending_user_text.is_empty()
    }

    /// Replaces the pending page number text without validating it.
    pub fn on_page_text_change(&mut self, value: &str) {
        value.clone_into(&mut self.state.pending_user_text);
    }

    /// Validates the pending text and, if it names a page in bounds, requests it.
    ///
    /// A rejected submit sets the validation flag and leaves the cursor and
    /// fetch phase untouched. The flag stays set until a submit succeeds.
    pub fn on_submit(&mut self) -> Option<FetchTicket> {
        match validate_page_input(&self.state.pending_user_text, self.total_pages()) {
            Ok(page) => {
                self.state.validation_error = false;
                self.state.pending_user_text.clear();
                Some(self.request(page))
            }
            Err(error) => {
                tracing::debug!(
                    input = %self.state.pending_user_text,
                    "rejected page input: {error}"
                );
                self.state.validation_error = true;
                None
            }
        }
    }

    /// Requests the page after the displayed one.
    ///
    /// Does nothing and returns `None` on the last page or before any page
    /// has loaded.
    pub fn on_next(&mut self) -> Option<FetchTicket> {
        if !self.can_go_next() {
            return None;
        }
        let page = self.current_page()?.next()?;
        Some(self.request(page))
    }

    /// Requests the page before the displayed one.
    ///
    /// Does nothing and returns `None` on the first page or before any page
    /// has loaded.
    pub fn on_prev(&mut self) -> Option<FetchTicket> {
        if !self.can_go_prev() {
            return None;
        }
        let page = self.current_page()?.prev()?;
        Some(self.request(page))
    }

    /// Requests the current cursor page again.
    pub fn on_reload(&mut self) -> FetchTicket {
        self.request(self.state.requested_page)
    }

    /// Applies the outcome of a fetch issued for `ticket`.
    ///
    /// Outcomes for any ticket other than the latest are discarded. A failed
    /// fetch keeps the previously displayed page and the requested cursor.
    pub fn on_fetch_resolved(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<PageResult, FetchError>,
    ) -> Resolution {
        let Phase::Loading { ticket: expected } = &self.state.phase else {
            tracing::debug!(
                page = ticket.page().get(),
                "discarding response with no fetch outstanding"
            );
            return Resolution::Stale;
        };

        if *expected != ticket {
            tracing::debug!(
                page = ticket.page().get(),
                token = ticket.token().get(),
                latest = self.last_token.get(),
                "discarding stale joke page response"
            );
            return Resolution::Stale;
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    page = result.current_page().get(),
                    total_pages = result.total_pages(),
                    items = result.items().len(),
                    "joke page loaded"
                );
                self.state.result = Some(result);
                self.state.phase = Phase::Idle;
                Resolution::Applied
            }
            Err(error) => {
                tracing::warn!(page = ticket.page().get(), "joke page fetch failed: {error}");
                self.state.phase = Phase::Failed { error };
                Resolution::Failed
            }
        }
    }

    fn request(&mut self, page: PageNumber) -> FetchTicket {
        self.last_token = self.last_token.following();
        let ticket = FetchTicket::new(page, self.last_token);
        self.state.requested_page = page;
        self.state.phase = Phase::Loading { ticket };
        ticket
    }
}

//! State owned by the [`PageController`](super::PageController).

use crate::jokes::{FetchError, Joke, PageNumber, PageResult};

/// Identifies one issued fetch.
///
/// Tokens increase monotonically per controller; only the most recently
/// issued one may update visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(super) const fn first() -> Self {
        Self(0)
    }

    pub(super) const fn following(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A request for the caller to fetch `page` and report back.
///
/// Hand the outcome to
/// [`PageController::on_fetch_resolved`](super::PageController::on_fetch_resolved)
/// together with this ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: PageNumber,
    token: RequestToken,
}

impl FetchTicket {
    pub(super) const fn new(page: PageNumber, token: RequestToken) -> Self {
        Self { page, token }
    }

    /// Page to fetch.
    #[must_use]
    pub const fn page(&self) -> PageNumber {
        self.page
    }

    /// Sequence token identifying this request.
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        self.token
    }
}

/// Where the controller is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is outstanding; only `ticket` may resolve it.
    Loading {
        /// The authoritative outstanding request.
        ticket: FetchTicket,
    },
    /// The last authoritative fetch succeeded.
    Idle,
    /// The last authoritative fetch failed.
    Failed {
        /// Why the fetch failed.
        error: FetchError,
    },
}

/// Snapshot of everything the controller owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    /// Page most recently requested; not advanced by failed validation.
    pub requested_page: PageNumber,
    /// Page number text typed by the user but not yet submitted.
    pub pending_user_text: String,
    /// Whether the last submit was rejected.
    pub validation_error: bool,
    /// Most recent successful page, retained across failures.
    pub result: Option<PageResult>,
    /// Fetch cycle phase.
    pub phase: Phase,
}

impl ControllerState {
    pub(super) const fn mounting(ticket: FetchTicket) -> Self {
        Self {
            requested_page: ticket.page(),
            pending_user_text: String::new(),
            validation_error: false,
            result: None,
            phase: Phase::Loading { ticket },
        }
    }

    /// Returns true while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }
}

/// What happened to a fetch outcome handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The page became the displayed result.
    Applied,
    /// The fetch failed; the error is now displayed.
    Failed,
    /// The ticket was superseded; the outcome was discarded.
    Stale,
}

/// What the display layer needs to render the joke list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState<'a> {
    /// Jokes to show, in order.
    pub items: &'a [Joke],
    /// Whether to show the loading placeholder instead.
    pub is_loading: bool,
}

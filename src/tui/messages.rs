//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async fetch results, and system events.

use crate::controller::FetchTicket;
use crate::jokes::{FetchError, PageResult};

/// Messages for the joke browsing TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Page number input
    /// Append a character to the page number text.
    InsertChar(char),
    /// Delete the last character of the page number text.
    Backspace,
    /// Clear the page number text, or quit when it is already empty.
    EscapePressed,
    /// Submit the page number text.
    Submit,

    // Paging
    /// Request the following page.
    NextPage,
    /// Request the preceding page.
    PrevPage,
    /// Fetch the requested page again.
    Reload,

    // Scrolling within the page
    /// Scroll the joke list up one line.
    ScrollUp,
    /// Scroll the joke list down one line.
    ScrollDown,

    // Data loading
    /// A fetch finished.
    PageLoaded {
        /// Ticket the fetch was issued for.
        ticket: FetchTicket,
        /// Fetch outcome.
        result: Result<PageResult, FetchError>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages that edit or submit the page number text.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::Backspace | Self::EscapePressed | Self::Submit
        )
    }

    /// Returns true for messages that move the page cursor.
    #[must_use]
    pub const fn is_paging(&self) -> bool {
        matches!(self, Self::NextPage | Self::PrevPage | Self::Reload)
    }

    /// Returns true for messages that scroll the joke list.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(self, Self::ScrollUp | Self::ScrollDown)
    }

    /// Returns true for fetch results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::PageLoaded { .. })
    }
}

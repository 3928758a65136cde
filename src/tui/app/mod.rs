//! Main TUI application model implementing the MVU pattern.
//!
//! [`JokeApp`] owns a [`PageController`] and turns its fetch tickets into
//! bubbletea-rs commands. Everything page related (cursor, validation, the
//! displayed result) lives in the controller; the app only adds view state.
//!
//! # Module Structure
//!
//! - `input_handlers`: Page number text editing and submit
//! - `paging_handlers`: Prev/Next/Reload and fetch commands
//! - `navigation`: Scrolling within the displayed page
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::controller::PageController;
use crate::jokes::JokeSource;

use super::components::JokeListComponent;
use super::messages::AppMsg;

mod input_handlers;
mod model_impl;
mod navigation;
mod paging_handlers;
mod rendering;

/// Default terminal width before the first resize event.
const DEFAULT_WIDTH: u16 = 80;
/// Default terminal height before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Rows used by everything except the joke list: header, instructions,
/// input, position line, two spacers, paging bar, and status bar.
const CHROME_HEIGHT: u16 = 8;

/// Main application model for the joke browsing TUI.
pub struct JokeApp {
    /// Page cursor and fetch state.
    pub(crate) controller: PageController,
    /// Source used for fetch commands.
    source: Option<Arc<dyn JokeSource>>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Joke list component.
    joke_list: JokeListComponent,
    /// Lines scrolled from the top of the joke list.
    pub(crate) scroll_offset: usize,
}

impl fmt::Debug for JokeApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JokeApp")
            .field("controller", &self.controller)
            .field("has_source", &self.source.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl JokeApp {
    /// Creates the application and the command fetching page 1.
    ///
    /// Without a source, the initial fetch fails with a configuration error
    /// that is shown in the status bar.
    #[must_use]
    pub fn mount(source: Option<Arc<dyn JokeSource>>) -> (Self, Cmd) {
        Self::mount_with_dimensions(source, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Creates the application for an explicit terminal size.
    #[must_use]
    pub fn mount_with_dimensions(
        source: Option<Arc<dyn JokeSource>>,
        width: u16,
        height: u16,
    ) -> (Self, Cmd) {
        let (controller, ticket) = PageController::mount();
        let mut app = Self {
            controller,
            source,
            width,
            height,
            show_help: false,
            joke_list: JokeListComponent::new(),
            scroll_offset: 0,
        };
        app.apply_layout();
        let cmd = app.fetch_cmd(ticket);
        (app, cmd)
    }

    /// Returns the page controller.
    #[must_use]
    pub const fn controller(&self) -> &PageController {
        &self.controller
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category and
    /// returns any resulting command.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_input() {
            return self.handle_input_msg(msg);
        }
        if msg.is_paging() {
            return self.handle_paging_msg(msg);
        }
        if msg.is_scroll() {
            return self.handle_scroll_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.apply_layout();
        self.clamp_scroll();
        None
    }

    /// Sizes the joke list to the rows left over by the chrome.
    fn apply_layout(&mut self) {
        let list_height = self.height.saturating_sub(CHROME_HEIGHT).max(1);
        self.joke_list.set_visible_height(usize::from(list_height));
    }

    /// Terminal width available to rendered rows.
    fn content_width(&self) -> usize {
        usize::from(self.width.max(1))
    }
}

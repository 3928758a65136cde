//! Scroll handlers for the joke list.

use bubbletea_rs::Cmd;

use super::JokeApp;
use crate::tui::messages::AppMsg;

impl JokeApp {
    /// Dispatches scroll messages.
    pub(super) fn handle_scroll_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            AppMsg::ScrollDown => {
                if self.scroll_offset < self.max_scroll() {
                    self.scroll_offset += 1;
                }
            }
            _ => {}
        }
        None
    }

    /// Keeps the scroll offset within the current page after a resize.
    pub(super) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.joke_list
            .max_scroll(self.controller.items(), self.content_width())
    }
}

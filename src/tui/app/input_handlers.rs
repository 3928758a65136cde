//! Page number input handlers for the joke TUI.

use bubbletea_rs::Cmd;

use super::JokeApp;
use crate::tui::messages::AppMsg;

/// Longest page number text accepted from the keyboard.
const MAX_INPUT_CHARS: usize = 10;

impl JokeApp {
    /// Handles page number editing and submit messages.
    pub(super) fn handle_input_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(character) => {
                self.insert_input_char(*character);
                None
            }
            AppMsg::Backspace => {
                self.backspace_input();
                None
            }
            AppMsg::EscapePressed => self.handle_escape(),
            AppMsg::Submit => self.handle_submit(),
            _ => None,
        }
    }

    fn insert_input_char(&mut self, character: char) {
        let current = self.controller.pending_user_text();
        if current.chars().count() >= MAX_INPUT_CHARS {
            return;
        }
        let mut text = current.to_owned();
        text.push(character);
        self.controller.on_page_text_change(&text);
    }

    fn backspace_input(&mut self) {
        let mut text = self.controller.pending_user_text().to_owned();
        if text.pop().is_some() {
            self.controller.on_page_text_change(&text);
        }
    }

    /// Clears pending text; quits when there is nothing to clear.
    fn handle_escape(&mut self) -> Option<Cmd> {
        if self.controller.pending_user_text().is_empty() {
            return Some(bubbletea_rs::quit());
        }
        self.controller.on_page_text_change("");
        None
    }

    fn handle_submit(&mut self) -> Option<Cmd> {
        let ticket = self.controller.on_submit()?;
        Some(self.fetch_cmd(ticket))
    }
}

//! `Model` trait implementation for the joke TUI application.
//!
//! Handles initialisation, update dispatch, and view rendering, and pads
//! every frame to the terminal size.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::JokeApp;
use crate::tui::components::JokeListViewContext;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for JokeApp {
    fn init() -> (Self, Option<Cmd>) {
        let (model, cmd) = Self::mount(crate::tui::joke_source());
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_instructions());
        output.push_str(&self.render_input_field());
        output.push_str(&self.render_position());
        output.push('\n');

        let list_ctx = JokeListViewContext {
            display: self.controller.display(),
            scroll_offset: self.scroll_offset,
            visible_height: self.joke_list.visible_height(),
            max_width: self.content_width(),
        };
        let list_view = self.joke_list.view(&list_ctx);
        let list_rows = list_view.lines().count();
        output.push_str(&list_view);
        let padding = self.joke_list.visible_height().saturating_sub(list_rows);
        output.push_str(&"\n".repeat(padding));

        output.push('\n');
        output.push_str(&self.render_paging_bar());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl JokeApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates one row to exactly `width` visible columns.
///
/// ANSI escape sequences are copied through without counting towards the
/// width, and a reset is appended if the row ends inside a style.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0usize;
    let mut escape = AnsiEscapeState::default();

    for ch in line.chars() {
        if escape.in_escape {
            escape.push(ch, &mut output);
            continue;
        }
        if ch == '\x1b' {
            escape.start(ch, &mut output);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if visible < width {
        output.push_str(&" ".repeat(width - visible));
    }
    if escape.had_ansi && !escape.ended_with_reset {
        output.push_str("\x1b[0m");
    }

    output
}

#[derive(Default)]
struct AnsiEscapeState {
    in_escape: bool,
    had_ansi: bool,
    ended_with_reset: bool,
    sequence: String,
}

impl AnsiEscapeState {
    fn start(&mut self, ch: char, output: &mut String) {
        self.in_escape = true;
        self.had_ansi = true;
        self.sequence.clear();
        self.sequence.push(ch);
        output.push(ch);
    }

    fn push(&mut self, ch: char, output: &mut String) {
        output.push(ch);
        self.sequence.push(ch);
        if ch.is_ascii_alphabetic() {
            self.in_escape = false;
            self.ended_with_reset = matches!(self.sequence.as_str(), "\x1b[0m" | "\x1b[m");
        }
    }
}

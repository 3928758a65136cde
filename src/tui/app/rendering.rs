//! Rendering logic for the joke TUI application.
//!
//! These are pure query methods that read state without modification.

use super::JokeApp;

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Dims `label` when the affordance it names is unavailable.
fn affordance(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_owned()
    } else {
        format!("{DIM}{label}{RESET}")
    }
}

impl JokeApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Jokepager - Dad Jokes";
        let loading_indicator = if self.controller.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the page number instructions, in red after a rejected submit.
    pub(super) fn render_instructions(&self) -> String {
        let text = self.controller.total_pages().map_or_else(
            || "Jump to a page once the first page has loaded:".to_owned(),
            |total| format!("Input must be a number between 1 and {total} (inclusive):"),
        );

        if self.controller.validation_error() {
            format!("{RED}{text}{RESET}\n")
        } else {
            format!("{text}\n")
        }
    }

    /// Renders the page number input and submit hint.
    pub(super) fn render_input_field(&self) -> String {
        let text = self.controller.pending_user_text();
        let submit = affordance("Enter: load page", self.controller.submit_enabled());
        format!("Page: [{text}_]  {submit}\n")
    }

    /// Renders the displayed page position.
    pub(super) fn render_position(&self) -> String {
        match (self.controller.current_page(), self.controller.total_pages()) {
            (Some(current), Some(total)) => format!("Showing page {current} of {total} pages\n"),
            _ => "No page loaded yet\n".to_owned(),
        }
    }

    /// Renders the Prev/Next controls, dimmed at their bounds.
    pub(super) fn render_paging_bar(&self) -> String {
        let prev = affordance("[< Prev]", self.controller.can_go_prev());
        let next = affordance("[Next >]", self.controller.can_go_next());
        format!("{prev}  {next}\n")
    }

    /// Renders the status bar with the fetch error or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = self.controller.fetch_error() {
            return format!("Error: {error} (F5 to retry)\n");
        }

        let hints = if self.width <= 80 {
            "←/→:page  Enter:go  F1:help  Esc:quit"
        } else {
            "←/→ PgUp/PgDn:page  0-9 Enter:go  ↑/↓:scroll  F5:reload  F1:help  Esc:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Paging:
  Left, PgUp     Previous page
  Right, PgDn    Next page
  F5             Reload the requested page

Jump to page:
  0-9            Type a page number
  Backspace      Delete one character
  Enter          Load the typed page
  Esc            Clear the typed page

Reading:
  Up             Scroll up
  Down           Scroll down

Other:
  F1             Toggle this help
  Esc            Quit (when nothing is typed)
  Ctrl+C         Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

//! Joke list component for displaying one page of jokes.
//!
//! Renders a loading placeholder while a fetch is outstanding, otherwise one
//! word-wrapped text block per joke, separated by blank lines. The body
//! scrolls line by line when the page is taller than the viewport.

use crate::controller::DisplayState;
use crate::jokes::{Joke, sanitize_text};

use super::text_wrap::wrap_text;

/// Default visible height for the joke list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Columns reserved for the left margin of each joke block.
const MARGIN: &str = "  ";

/// Context for rendering the joke list view.
#[derive(Debug, Clone, Copy)]
pub struct JokeListViewContext<'a> {
    /// Items and loading flag exposed by the page controller.
    pub display: DisplayState<'a>,
    /// Number of lines scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying the jokes of the current page.
#[derive(Debug, Clone)]
pub struct JokeListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for JokeListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl JokeListComponent {
    /// Creates a new joke list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Returns the largest useful scroll offset for `items` at `max_width`.
    #[must_use]
    pub fn max_scroll(&self, items: &[Joke], max_width: usize) -> usize {
        body_lines(items, max_width)
            .len()
            .saturating_sub(self.visible_height)
    }

    /// Renders the joke list as a string.
    #[must_use]
    pub fn view(&self, ctx: &JokeListViewContext<'_>) -> String {
        if ctx.display.is_loading {
            return format!("{MARGIN}Loading jokes...\n");
        }
        if ctx.display.items.is_empty() {
            return format!("{MARGIN}No jokes on this page.\n");
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for line in body_lines(ctx.display.items, ctx.max_width)
            .into_iter()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Wraps every joke and joins the blocks with blank separator lines.
fn body_lines(items: &[Joke], max_width: usize) -> Vec<String> {
    let text_width = max_width.saturating_sub(MARGIN.len() + 1).max(1);
    let mut lines = Vec::new();

    for (index, joke) in items.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(
            wrap_text(&sanitize_text(&joke.text), text_width)
                .into_iter()
                .map(|line| format!("{MARGIN}{line}")),
        );
    }

    lines
}

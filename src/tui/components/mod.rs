//! UI components for the joke browsing TUI.
//!
//! Components are stateless renderers; the application model owns all
//! state and passes it in through a view context.

mod joke_list;
mod text_wrap;

pub use joke_list::{JokeListComponent, JokeListViewContext};
pub use text_wrap::wrap_text;

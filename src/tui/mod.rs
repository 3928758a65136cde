//! Terminal User Interface for browsing pages of jokes.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::JokeApp`] wraps a [`PageController`] together with
//!   view-only state such as scrolling and the help overlay
//! - **View**: Rendering logic in `app::rendering` and [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Joke Source
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the data source is stored at module level. Call
//! [`set_joke_source`] before starting the program; `JokeApp::init()` reads
//! it and issues the initial fetch for page 1.
//!
//! [`PageController`]: crate::controller::PageController

use std::sync::{Arc, OnceLock};

use crate::jokes::JokeSource;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::JokeApp;

/// Global storage for the joke source used by `JokeApp::init()`.
static JOKE_SOURCE: OnceLock<Arc<dyn JokeSource>> = OnceLock::new();

/// Sets the joke source for the TUI application.
///
/// Returns `true` if the source was set, `false` if one was already set.
#[must_use]
pub fn set_joke_source(source: Arc<dyn JokeSource>) -> bool {
    JOKE_SOURCE.set(source).is_ok()
}

/// Returns the joke source set by [`set_joke_source`], if any.
pub(crate) fn joke_source() -> Option<Arc<dyn JokeSource>> {
    JOKE_SOURCE.get().cloned()
}

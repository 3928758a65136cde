//! Jokepager library crate: a paged browser for a remote joke collection.
//!
//! [`PageController`] owns the paging state and decides which page to fetch
//! next. A [`jokes::JokeSource`] loads pages over HTTP (optionally behind a
//! session cache), and the [`tui`] module renders the controller in the
//! terminal.

pub mod config;
pub mod controller;
pub mod error;
pub mod jokes;
pub mod logging;
pub mod tui;

pub use config::JokePagerConfig;
pub use controller::PageController;
pub use error::AppError;
pub use jokes::{FetchError, Joke, PageNumber, PageResult};

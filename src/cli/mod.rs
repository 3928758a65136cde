//! CLI operation mode handlers.
//!
//! - [`browse_tui`]: Interactive TUI for browsing pages of jokes
//! - [`single_page`]: Print one page to stdout and exit
//!
//! Output formatting utilities are in [`output`].

pub mod browse_tui;
pub mod output;
pub mod single_page;

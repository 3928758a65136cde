//! TUI mode for browsing pages of jokes.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use jokepager::AppError;
use jokepager::jokes::JokeSource;
use jokepager::tui::{JokeApp, set_joke_source};

/// Runs the interactive TUI over `source`.
///
/// # Errors
///
/// Returns [`AppError::Terminal`] if the TUI fails to initialise or run.
pub async fn run(source: Arc<dyn JokeSource>) -> Result<(), AppError> {
    // Stored for JokeApp::init().
    if !set_joke_source(source) {
        tracing::debug!("joke source already set; keeping the existing one");
    }

    run_tui().await.map_err(|error| AppError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `JokeApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<JokeApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

//! Jokepager CLI entrypoint.
//!
//! Without `--page` the interactive browser starts; with `--page N` a single
//! page is printed to stdout.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use jokepager::config::OperationMode;
use jokepager::jokes::{CachingJokeSource, HttpJokeSource, JokeSource};
use jokepager::logging::{LogDestination, init_logging};
use jokepager::{AppError, JokePagerConfig};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    init_logging(&LogDestination::select(config.log_file_path(), mode))?;

    let remote = HttpJokeSource::new(&config.source_settings())?;
    let source: Arc<dyn JokeSource> =
        Arc::new(CachingJokeSource::new(remote, config.cache_capacity));
    tracing::info!(?mode, "jokepager starting");

    match mode {
        OperationMode::Browse => cli::browse_tui::run(source).await,
        OperationMode::SinglePage(page) => cli::single_page::run(source.as_ref(), page).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<JokePagerConfig, AppError> {
    JokePagerConfig::load().map_err(|error| AppError::Configuration {
        message: error.to_string(),
    })
}

//! Tracing subscriber setup for the jokepager binary.
//!
//! The filter is read from `JOKEPAGER_LOG` using the usual `EnvFilter`
//! directive syntax. The browse TUI owns the terminal, so without a log file
//! it installs no subscriber at all.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::OperationMode;
use crate::error::AppError;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "JOKEPAGER_LOG";

const FILE_DEFAULT_DIRECTIVE: &str = "info";
const STDERR_DEFAULT_DIRECTIVE: &str = "warn";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Append to the given file.
    File(PathBuf),
    /// Write to standard error.
    Stderr,
    /// Install no subscriber.
    Disabled,
}

impl LogDestination {
    /// Chooses a destination from the configured log file and run mode.
    #[must_use]
    pub fn select(log_file: Option<&Path>, mode: OperationMode) -> Self {
        match (log_file, mode) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, OperationMode::SinglePage(_)) => Self::Stderr,
            (None, OperationMode::Browse) => Self::Disabled,
        }
    }

    const fn default_directive(&self) -> &'static str {
        match self {
            Self::File(_) | Self::Disabled => FILE_DEFAULT_DIRECTIVE,
            Self::Stderr => STDERR_DEFAULT_DIRECTIVE,
        }
    }
}

/// Builds the event filter, preferring `JOKEPAGER_LOG` over `default_directive`.
fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global tracing subscriber for `destination`.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the log file cannot be opened.
pub fn init_logging(destination: &LogDestination) -> Result<(), AppError> {
    let filter = build_filter(destination.default_directive());

    match destination {
        LogDestination::Disabled => Ok(()),
        LogDestination::Stderr => {
            let _already_installed = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .compact()
                .with_writer(io::stderr)
                .try_init();
            Ok(())
        }
        LogDestination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| AppError::Io {
                    message: format!("cannot open log file {}: {error}", path.display()),
                })?;
            let _already_installed = fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(())
        }
    }
}

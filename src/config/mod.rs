//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.jokepager.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `JOKEPAGER_BASE_URL`, `JOKEPAGER_PER_PAGE`,
//!    and so on
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--page`/`-p`, ...
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "https://icanhazdadjoke.com/search"
//! per_page = 20
//! timeout_seconds = 10
//! cache_capacity = 128
//! log_file = "jokepager.log"
//! ```

use std::path::Path;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::jokes::source::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_CAPACITY, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS,
    SourceSettings, default_user_agent,
};

/// Largest page size the search endpoint honours.
pub const MAX_PER_PAGE: u32 = 30;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Browse pages interactively in the terminal UI.
    Browse,
    /// Print one page to stdout and exit. Holds the page as typed.
    SinglePage(u32),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use jokepager::JokePagerConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = JokePagerConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration out of range");
/// let settings = config.source_settings();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "JOKEPAGER",
    discovery(
        dotfile_name = ".jokepager.toml",
        config_file_name = "jokepager.toml",
        app_name = "jokepager"
    )
)]
pub struct JokePagerConfig {
    /// Search endpoint queried for joke pages.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `JOKEPAGER_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// Jokes requested per page, between 1 and 30.
    ///
    /// Can be provided via:
    /// - CLI: `--per-page <N>` or `-n <N>`
    /// - Environment: `JOKEPAGER_PER_PAGE`
    #[ortho_config(cli_short = 'n')]
    pub per_page: u32,

    /// HTTP request timeout, in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// Maximum number of pages held in the in-memory cache.
    #[ortho_config()]
    pub cache_capacity: u64,

    /// User-Agent header sent with every request.
    ///
    /// Defaults to `jokepager/<version>`.
    #[ortho_config()]
    pub user_agent: Option<String>,

    /// Prints this page to stdout and exits instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--page <N>` or `-p <N>`
    /// - Environment: `JOKEPAGER_PAGE`
    #[ortho_config(cli_short = 'p')]
    pub page: Option<u32>,

    /// File receiving tracing output.
    ///
    /// The TUI writes no logs unless this is set.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for JokePagerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            per_page: u32::from(DEFAULT_PER_PAGE),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            user_agent: None,
            page: None,
            log_file: None,
        }
    }
}

impl JokePagerConfig {
    /// Checks that numeric settings are within their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(AppError::Configuration {
                message: format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                    self.per_page
                ),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(AppError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }
        if self.cache_capacity == 0 {
            return Err(AppError::Configuration {
                message: "cache_capacity must be at least 1".to_owned(),
            });
        }
        if self.base_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(AppError::Configuration {
                message: "base_url must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        match self.page {
            Some(page) => OperationMode::SinglePage(page),
            None => OperationMode::Browse,
        }
    }

    /// Returns the configured log file path, if any.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref().map(Path::new)
    }

    /// Builds the HTTP source settings, falling back to defaults.
    ///
    /// Call [`Self::validate`] first; out-of-range page sizes are clamped.
    #[must_use]
    pub fn source_settings(&self) -> SourceSettings {
        let per_page =
            u8::try_from(self.per_page.clamp(1, MAX_PER_PAGE)).unwrap_or(DEFAULT_PER_PAGE);
        SourceSettings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            per_page,
            timeout: Duration::from_secs(self.timeout_seconds.max(1)),
            user_agent: self.user_agent.clone().unwrap_or_else(default_user_agent),
        }
    }
}

#[cfg(test)]
mod tests;

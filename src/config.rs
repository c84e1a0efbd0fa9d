//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::export::DEFAULT_FILENAME;
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Deck file to present
    pub deck_path: Option<PathBuf>,
    /// Output file for PDF export
    pub export_file: PathBuf,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            deck_path: None,
            export_file: PathBuf::from(DEFAULT_FILENAME),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("PAGES_DECK") {
            config.deck_path = Some(expand(&path));
        }

        if let Ok(path) = env::var("PAGES_EXPORT_FILE") {
            if !path.trim().is_empty() {
                config.export_file = expand(&path);
            }
        }

        Ok(config)
    }

    /// Override the deck path with a command-line argument, if given.
    #[must_use]
    pub fn with_deck_arg(mut self, arg: Option<String>) -> Self {
        if let Some(arg) = arg {
            self.deck_path = Some(expand(&arg));
        }
        self
    }

    /// The deck path, or a configuration error explaining how to set one.
    pub fn require_deck_path(&self) -> Result<&Path> {
        self.deck_path.as_deref().ok_or_else(|| {
            Error::config(
                "No deck file given",
                "Pass a deck path as the first argument or set PAGES_DECK",
            )
        })
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach. The repository
//! itself is always named positionally on the command line, so only the
//! ambient settings live here.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.persent.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PERSENT_TOKEN`, `PERSENT_API_BASE`,
//!    `PERSENT_CACHE_DIR`, or legacy `GITHUB_API_TOKEN` for the token
//! 4. **Command-line arguments** – `--token`/`-t`, `--api-base`, and
//!    `--cache-dir`/`-c`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://github.example.com/api/v3"
//! cache_dir = "/var/cache/persent"
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::locator::DEFAULT_API_BASE;

/// Environment variable consulted when no token is configured.
pub const LEGACY_TOKEN_ENV: &str = "GITHUB_API_TOKEN";

/// Directory holding cached comment sets when none is configured.
pub const DEFAULT_CACHE_DIR: &str = ".";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use persent::PersentConfig;
///
/// let config = PersentConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PERSENT",
    discovery(
        dotfile_name = ".persent.toml",
        config_file_name = "persent.toml",
        app_name = "persent"
    )
)]
pub struct PersentConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PERSENT_TOKEN` or `GITHUB_API_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`; set it for GitHub Enterprise.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Directory where fetched comment sets are cached.
    ///
    /// Defaults to the working directory.
    #[ortho_config(cli_short = 'c')]
    pub cache_dir: Option<String>,
}

impl PersentConfig {
    /// Resolves the token from configuration or the legacy
    /// `GITHUB_API_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(IntakeError::MissingToken)
    }

    /// Returns the configured API base or the public GitHub endpoint.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Returns the configured cache directory or the working directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Utf8Path {
        Utf8Path::new(self.cache_dir.as_deref().unwrap_or(DEFAULT_CACHE_DIR))
    }
}

#[cfg(test)]
mod tests;

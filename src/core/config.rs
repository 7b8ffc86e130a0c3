//! Settings resolution.
//!
//! Settings come from, highest precedence first: command-line flags,
//! environment variables (handled by clap), a TOML config file, and
//! built-in defaults. The token is never read from a file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Optional defaults loaded from a `.cihelper.toml` file.
///
/// ```toml
/// owner = "NatLibFi"
/// repo = "ekirjasto-android-core"
/// api_version = "2022-11-28"
/// api_url = "https://api.github.com"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub api_version: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
}

impl FileConfig {
    /// Load the config file.
    ///
    /// An explicit `path` must exist. Without one, `./.cihelper.toml` and then
    /// the user config file are tried; if neither exists, defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(found) => Self::load_from(&found),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(constants::CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(
                dir.join(constants::CONFIG_DIR)
                    .join(constants::USER_CONFIG_FILE),
            );
        }
        paths
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub api_version: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub token: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub api_version: String,
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
}

impl Settings {
    /// Merge overrides over the file config over built-in defaults.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Self {
        Self {
            api_url: overrides
                .api_url
                .or(file.api_url)
                .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string()),
            api_version: overrides
                .api_version
                .or(file.api_version)
                .unwrap_or_else(|| constants::DEFAULT_API_VERSION.to_string()),
            owner: overrides
                .owner
                .or(file.owner)
                .unwrap_or_else(|| constants::DEFAULT_OWNER.to_string()),
            repo: overrides
                .repo
                .or(file.repo)
                .unwrap_or_else(|| constants::DEFAULT_REPO.to_string()),
            token: overrides
                .token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

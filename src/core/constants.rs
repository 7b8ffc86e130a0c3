//! Constants used throughout cihelper.
//!
//! Centralizes magic strings and default settings.

/// Project configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = ".cihelper.toml";

/// Directory under the user config dir (`~/.config/cihelper/config.toml`).
pub const CONFIG_DIR: &str = "cihelper";

/// File name inside [`CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CIHELPER_LOG";

/// Environment variable supplying the default GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_OWNER: &str = "NatLibFi";
pub const DEFAULT_REPO: &str = "ekirjasto-android-core";

/// Media type GitHub recommends for REST calls.
pub const ACCEPT: &str = "application/vnd.github+json";

pub const USER_AGENT: &str = concat!("cihelper/", env!("CARGO_PKG_VERSION"));

/// Request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Page size used when listing secrets (GitHub maximum).
pub const SECRETS_PER_PAGE: usize = 100;

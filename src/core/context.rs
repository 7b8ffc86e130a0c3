//! Per-invocation request context.

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::transport::{ApiRequest, Method};
use crate::error::{ConfigError, Result};

/// Addressing and authentication shared by every remote call.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct RequestContext {
    api_url: String,
    api_version: String,
    owner: String,
    repo: String,
    token: String,
}

impl RequestContext {
    /// Build a context from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` without a token and
    /// `ConfigError::InvalidValue` for blank addressing fields or an owner
    /// or repo that is not a single path segment.
    pub fn new(settings: Settings) -> Result<Self> {
        let token = settings.token.ok_or(ConfigError::MissingToken)?;

        let non_blank = |field: &'static str, value: String| -> Result<String> {
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
            Ok(value)
        };

        let api_url = non_blank("api url", settings.api_url)?;
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api url",
                reason: format!("not an http(s) url: {}", api_url),
            }
            .into());
        }

        let owner = non_blank("owner", settings.owner)?;
        check_path_segment("owner", &owner)?;
        let repo = non_blank("repo", settings.repo)?;
        check_path_segment("repo", &repo)?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_version: non_blank("api version", settings.api_version)?,
            owner,
            repo,
            token,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// `owner/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Path of the repository's Actions secrets resource, plus `suffix`.
    pub fn secrets_path(&self, suffix: &str) -> String {
        format!(
            "/repos/{}/{}/actions/secrets{}",
            self.owner, self.repo, suffix
        )
    }

    /// Start an authenticated request for `path`.
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        let path = path.into();
        ApiRequest {
            method,
            url: format!("{}{}", self.api_url, path),
            path,
            headers: vec![
                ("Accept", constants::ACCEPT.to_string()),
                ("Authorization", format!("Bearer {}", self.token)),
                ("X-GitHub-Api-Version", self.api_version.clone()),
            ],
            body: None,
        }
    }
}

/// Owner and repo are spliced into request paths verbatim, so they must stay
/// a single URL path segment: only `A-Z a-z 0-9 . _ -`, and not `.` or `..`.
fn check_path_segment(field: &'static str, value: &str) -> Result<()> {
    let invalid = |reason: String| ConfigError::InvalidValue { field, reason };

    if let Some(ch) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(invalid(format!(
            "invalid character '{}' in '{}'. Only A-Z, a-z, 0-9, '.', '_' and '-' are allowed",
            ch, value
        ))
        .into());
    }
    if value == "." || value == ".." {
        return Err(invalid(format!("'{}' is not a repository name", value)).into());
    }
    Ok(())
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

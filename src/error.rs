//! Error types for cihelper.
//!
//! Each concern has its own error enum; all of them convert into the
//! top-level [`Error`], which knows the process exit code it maps to.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::exit_codes::ExitCode;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Seal(#[from] SealError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read secret file {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config(ConfigError::MissingToken) => ExitCode::TokenRequired,
            Error::Config(ConfigError::Read { .. }) => ExitCode::FileSystem,
            Error::Config(_) => ExitCode::InvalidArgument,
            Error::Validation(_) => ExitCode::InvalidArgument,
            Error::FileSystem { .. } => ExitCode::FileSystem,
            Error::Seal(_) | Error::Remote(_) | Error::Json(_) => ExitCode::Generic,
        }
    }
}

/// Sealed-box encryption errors.
#[derive(Error, Debug)]
pub enum SealError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("sealed box encryption failed")]
    SealFailed,
}

/// Errors talking to the GitHub REST API.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
        body: String,
    },

    #[error("{path} returned an unexpected payload: {reason}")]
    UnexpectedPayload {
        path: String,
        status: u16,
        reason: String,
    },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RemoteError {
    /// HTTP status of the failed call, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } | RemoteError::UnexpectedPayload { status, .. } => {
                Some(*status)
            }
            RemoteError::Transport { .. } => None,
        }
    }

    /// Response body of the failed call, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            RemoteError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Configuration and settings errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GitHub token is required (set in the GITHUB_TOKEN environment variable)")]
    MissingToken,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// Result type alias for cihelper operations.
pub type Result<T> = std::result::Result<T, Error>;

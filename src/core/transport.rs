//! HTTP transport abstraction.
//!
//! The GitHub client only builds [`ApiRequest`]s and interprets
//! [`ApiResponse`]s; sending them is delegated to a [`Transport`] so remote
//! operations can run against an in-process fake in tests.
//!
//! ## Adding a New Transport
//!
//! 1. Implement the `Transport` trait
//! 2. Return the raw status and body; status interpretation stays in the client

use std::time::Duration;

use serde_json::Value;
use tracing::trace;

use crate::core::constants;
use crate::error::{RemoteError, Result};

/// HTTP methods used by the secrets API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully addressed request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Path relative to the API root, used in diagnostics.
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query string parameter.
    pub fn query(mut self, name: &str, value: impl std::fmt::Display) -> Self {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        self.url = format!("{}{}{}={}", self.url, sep, name, value);
        self
    }

    /// First header value with `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the remote service.
pub trait Transport {
    /// Send one request and return the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Transport` if no response was received.
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking reqwest transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Transport` if the TLS backend cannot be set up.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|source| RemoteError::Transport {
                path: "client setup".to_string(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        trace!(method = request.method.as_str(), url = %request.url, "sending");

        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let transport_error = |source: reqwest::Error| RemoteError::Transport {
            path: request.path.clone(),
            source,
        };

        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;

        Ok(ApiResponse { status, body })
    }
}

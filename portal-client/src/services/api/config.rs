//! Client configuration
//!
//! The API base URL is injected per client instead of being a compile-time
//! constant, so tests and alternate environments can point at their own server.

use std::time::Duration;

use url::Url;

use crate::core::error::{ApiError, Result};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "PORTAL_API_URL";

/// Environment variable setting a per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PORTAL_API_TIMEOUT_SECS";

/// Settings for an [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Per-request timeout. `None` lets a request run until the transport gives up.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("portal-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup(ENV_API_URL)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: lookup(ENV_TIMEOUT_SECS)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            user_agent: defaults.user_agent,
        }
    }

    /// Check the base URL and return it without a trailing slash.
    pub fn normalized_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim();
        let url = Url::parse(trimmed)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported URL scheme '{}' in {}",
                url.scheme(),
                trimmed
            )));
        }

        if url.host_str().is_none() {
            return Err(ApiError::Config(format!("missing host in {}", trimmed)));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::Config(format!(
                "base URL must not carry a query or fragment: {}",
                trimmed
            )));
        }

        Ok(trimmed.trim_end_matches('/').to_string())
    }
}

//! # API Client
//!
//! Main HTTP client for portal API communication.
//!
//! Every endpoint module (`students`, `courses`, `enrollments`) builds a
//! request and hands it to [`ApiClient::fetch`] or [`ApiClient::fetch_optional`],
//! which own the status check, error-message extraction, decoding and logging.

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;
use uuid::Uuid;

use super::config::ClientConfig;
use crate::core::error::{ApiError, Result};

/// HTTP client for communicating with the portal API server.
///
/// Holds no session state. Cloning is cheap and clones share reqwest's
/// connection pool, so one client can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client for [`DEFAULT_BASE_URL`](super::config::DEFAULT_BASE_URL).
    pub fn new() -> Self {
        let config = ClientConfig::default();
        let client = build_http_client(&config).unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Create a client from explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let client = build_http_client(&config)?;

        tracing::debug!(base_url = %base_url, timeout = ?config.timeout, "API client created");

        Ok(Self { client, base_url })
    }

    /// Shorthand for `with_config(ClientConfig::new(base_url))`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Build a client from `PORTAL_API_URL` / `PORTAL_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Base URL for API requests, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a success body into `T`.
    ///
    /// A non-success status becomes [`ApiError::Status`] carrying the
    /// server's `error` message, or `fallback` when it sent none.
    pub(crate) async fn fetch<T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let response = self.send(operation, request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(rejection(operation, response, fallback, start).await);
        }

        let body = read_body(operation, response).await?;
        let value = decode::<T>(operation, &body)?;

        tracing::debug!(
            operation,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Request succeeded"
        );
        Ok(value)
    }

    /// Like [`fetch`](Self::fetch), but an empty success body (e.g. `204 No
    /// Content`) decodes as `T::default()`.
    pub(crate) async fn fetch_or_default<T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let start = Instant::now();
        let response = self.send(operation, request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(rejection(operation, response, fallback, start).await);
        }

        let body = read_body(operation, response).await?;
        let value = if is_blank(&body) {
            T::default()
        } else {
            decode::<T>(operation, &body)?
        };

        tracing::debug!(
            operation,
            status = status.as_u16(),
            empty_body = is_blank(&body),
            duration_ms = start.elapsed().as_millis(),
            "Request succeeded"
        );
        Ok(value)
    }

    /// Like [`fetch`](Self::fetch), but "no such record" is `Ok(None)`.
    ///
    /// A 404 status, a JSON `null` body, or an empty body all count as absent.
    pub(crate) async fn fetch_optional<T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let response = self.send(operation, request).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(
                operation,
                duration_ms = start.elapsed().as_millis(),
                "Record not found"
            );
            return Ok(None);
        }

        if !status.is_success() {
            return Err(rejection(operation, response, fallback, start).await);
        }

        let body = read_body(operation, response).await?;
        if is_blank(&body) {
            return Ok(None);
        }

        let value = decode::<Option<T>>(operation, &body)?;

        tracing::debug!(
            operation,
            status = status.as_u16(),
            found = value.is_some(),
            duration_ms = start.elapsed().as_millis(),
            "Request succeeded"
        );
        Ok(value)
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> Result<Response> {
        let request_id = Uuid::new_v4();
        tracing::debug!(operation, request_id = %request_id, "Sending request");

        request
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(operation, request_id = %request_id, error = %e, "Network error");
                ApiError::Network(e.to_string())
            })
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ApiError::Config(e.to_string()))
}

async fn read_body(operation: &'static str, response: Response) -> Result<Vec<u8>> {
    response.bytes().await.map(|b| b.to_vec()).map_err(|e| {
        tracing::error!(operation, error = %e, "Failed to read response body");
        ApiError::from(e)
    })
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

fn decode<T>(operation: &'static str, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice::<T>(body).map_err(|e| {
        tracing::error!(operation, error = %e, "Response parse error");
        ApiError::from(e)
    })
}

/// Turn a non-success response into [`ApiError::Status`].
async fn rejection(
    operation: &'static str,
    response: Response,
    fallback: &str,
    start: Instant,
) -> ApiError {
    let status = response.status();
    let message = match response.bytes().await {
        Ok(body) => server_message(&body).unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    };

    tracing::warn!(
        operation,
        status = status.as_u16(),
        error = %message,
        duration_ms = start.elapsed().as_millis(),
        "Request rejected"
    );

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// The `error` field of a JSON error body, if present and non-empty.
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
        .filter(|msg| !msg.trim().is_empty())
}

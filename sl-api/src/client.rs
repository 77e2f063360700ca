//! HTTP client for the platform backend REST API.
//!
//! Handles bearer authentication, timeout management, JSON body
//! serialization, and content-type aware response decoding. Requests are
//! issued exactly once: a failed call is reported to the caller, never
//! retried.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use sl_core::config::BackendConfig;
use sl_core::error::{SlError, SlResult};

use crate::response::ApiResponse;

/// A decoded response body: parsed JSON or raw text, depending on the
/// response content type.
#[derive(Debug, Clone)]
pub enum ApiBody {
    Json(serde_json::Value),
    Text(String),
}

/// HTTP client for communicating with the platform backend.
///
/// Wraps reqwest::Client with bearer authentication and a bounded
/// per-request timeout.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Client,
    /// Base URL for the API (e.g. "https://api.sitelink.example/v1").
    base_url: String,
    /// Bearer token attached to every request when present.
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new ApiClient from backend configuration.
    pub fn new(config: &BackendConfig) -> SlResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(SlError::MissingConfig("backend.base_url".into()));
        }

        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_millis(config.api_timeout_ms))
            .build()
            .map_err(|e| SlError::Http(format!("failed to build HTTP client: {e}")))?;

        let auth_token = match config.auth_token.trim() {
            "" => None,
            token => Some(token.to_string()),
        };

        Ok(Self {
            inner,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Internal: build a request for the given method, URL, and optional JSON body.
    fn build_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> RequestBuilder {
        let mut builder = self.inner.request(method, url);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(b) = body {
            builder = builder.json(b);
        }
        builder
    }

    /// Execute a request once and map the outcome.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> SlResult<Response> {
        let url = self.url(path);
        debug!("{} {}", method, path);

        let response = self
            .build_request(method, &url, body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        Self::check_status(response).await
    }

    // --- Public HTTP methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> SlResult<Response> {
        self.request(Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> SlResult<Response> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &serde_json::Value) -> SlResult<Response> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, path: &str) -> SlResult<Response> {
        self.request(Method::DELETE, path, None).await
    }

    // --- Response helpers ---

    /// Decode a response body by content type: JSON responses are parsed,
    /// anything else is returned as raw text.
    pub async fn body(response: Response) -> SlResult<ApiBody> {
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        if is_json {
            let value = response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| SlError::Serialization(format!("failed to parse response: {e}")))?;
            Ok(ApiBody::Json(value))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| SlError::Http(format!("failed to read response body: {e}")))?;
            Ok(ApiBody::Text(text))
        }
    }

    /// Deserialize a response body into an ApiResponse<T>.
    pub async fn parse_response<T: DeserializeOwned>(
        response: Response,
    ) -> SlResult<ApiResponse<T>> {
        response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| SlError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Convenience: GET + parse into ApiResponse<T>.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SlResult<ApiResponse<T>> {
        let resp = self.get(path).await?;
        Self::parse_response(resp).await
    }

    /// Convenience: POST + parse into ApiResponse<T>.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> SlResult<ApiResponse<T>> {
        let resp = self.post(path, body).await?;
        Self::parse_response(resp).await
    }

    /// Ping the backend to check reachability. Returns the round-trip latency.
    pub async fn health_check(&self) -> SlResult<Duration> {
        let start = std::time::Instant::now();
        let resp: ApiResponse = self.get_json("/ping").await?;
        if resp.is_success() {
            Ok(start.elapsed())
        } else {
            Err(SlError::Http("health check failed".into()))
        }
    }

    /// Check the HTTP status code and convert to the matching error kind.
    async fn check_status(response: Response) -> SlResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(SlError::Unauthenticated(format!("backend returned {status}")));
        }
        if status == StatusCode::FORBIDDEN {
            return Err(SlError::PermissionDenied(format!("backend returned {status}")));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(SlError::NotFound(format!("backend returned {status}")));
        }
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlError::Server {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }
}

/// Classify a reqwest transport error into an SlError variant.
pub(crate) fn classify_transport_error(e: reqwest::Error) -> SlError {
    if e.is_timeout() {
        SlError::Timeout
    } else if e.is_connect() {
        SlError::Http(format!("connection failed: {e}"))
    } else {
        SlError::Http(e.to_string())
    }
}

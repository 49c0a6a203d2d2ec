/**
 * Backend HTTP Client
 *
 * Thin wrapper around `reqwest::Client` that knows the configured API base
 * (`<API_ENDPOINT>/<API_VERSION>`) and normalizes every upstream answer into
 * either a JSON body or an `ApiError`.
 *
 * # Response Normalization
 *
 * - `204 No Content` → success without body
 * - `504 Gateway Timeout` (or a client-side timeout) → `ApiError::GatewayTimeout`
 * - non-JSON content type → `ApiError::UnexpectedFormat` (first 200 chars logged)
 * - 4xx/5xx JSON → `ApiError::Status` carrying the upstream status and body
 * - 2xx JSON with an `error` indicator → `ApiError::Rejected`
 * - anything else → success with the parsed body
 *
 * Calls are single-shot: no retries.
 */
use axum::http::{header::CONTENT_TYPE, StatusCode};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

use crate::backend::api_client::error::ApiError;
use crate::shared::config::AppConfig;

/// Characters of a non-JSON body kept in the log line
const LOGGED_BODY_CHARS: usize = 200;

/// Successful upstream answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// `None` for no-content answers
    pub body: Option<Value>,
}

impl ApiResponse {
    /// The body, or JSON `null` for no-content answers
    pub fn into_body(self) -> Value {
        self.body.unwrap_or(Value::Null)
    }
}

/// Client for the booking backend
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Build a client from the process configuration
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.api_base())
            .map_err(|e| ApiError::unavailable(format!("invalid API base URL: {e}")))?;
        let http = Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| ApiError::unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base })
    }

    /// Full URL for a path below the version prefix.
    ///
    /// Each segment is percent-encoded on its own, so a visitor-supplied id
    /// can never escape its path position.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::unavailable("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> Result<ApiResponse, ApiError> {
        let url = self.url(segments)?;
        self.send(Method::GET, self.http.get(url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(segments)?;
        self.send(Method::POST, self.http.post(url).json(body)).await
    }

    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(segments)?;
        self.send(Method::DELETE, self.http.delete(url).json(body)).await
    }

    async fn send(&self, method: Method, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} request to backend failed: {}", method, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let url = response.url().clone();
        tracing::debug!("{} {} -> {}", method, url, status);

        if status == StatusCode::GATEWAY_TIMEOUT {
            tracing::warn!("Backend gateway timeout for {} {}", method, url);
            return Err(ApiError::GatewayTimeout);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse { status, body: None });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("json"));

        if !is_json {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(
                "Non-JSON response from API ({} {} -> {}): {}",
                method,
                url,
                status,
                truncate(&text, LOGGED_BODY_CHARS)
            );
            return Err(ApiError::UnexpectedFormat { status });
        }

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                tracing::error!(
                    "Malformed JSON from API ({} {} -> {}): {}; body: {}",
                    method,
                    url,
                    status,
                    e,
                    truncate(&String::from_utf8_lossy(&bytes), LOGGED_BODY_CHARS)
                );
                ApiError::UnexpectedFormat { status }
            })?
        };

        if !status.is_success() {
            tracing::info!("Backend answered {} for {} {}", status, method, url);
            return Err(ApiError::Status { status, body });
        }
        if has_error_indicator(&body) {
            tracing::info!("Backend reported an error with status {} for {} {}", status, method, url);
            return Err(ApiError::Rejected { body });
        }

        Ok(ApiResponse {
            status,
            body: if body.is_null() { None } else { Some(body) },
        })
    }
}

/// Whether a 2xx body still reports failure (`{"error": ...}` with a truthy value)
pub fn has_error_indicator(body: &Value) -> bool {
    match body.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

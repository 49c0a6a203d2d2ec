/**
 * Error Conversion
 *
 * Turns a `BackendError` into the JSON response the browser scripts expect.
 *
 * # Response Format
 *
 * Upstream errors that carried a JSON body are relayed with that body
 * unchanged. Everything else is answered with:
 * ```json
 * { "message": "Human readable message" }
 * ```
 * Gateway timeouts also carry `"code": "BACKEND_TIMEOUT"`.
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use crate::backend::api_client::ApiError;
use crate::backend::error::types::{BackendError, BACKEND_TIMEOUT_CODE};

impl BackendError {
    /// JSON body for this error
    pub fn body(&self) -> Value {
        match self {
            Self::Api(ApiError::Status { body, .. }) | Self::Api(ApiError::Rejected { body }) => {
                body.clone()
            }
            Self::Api(ApiError::GatewayTimeout) => json!({
                "message": self.message(),
                "code": BACKEND_TIMEOUT_CODE,
            }),
            _ => json!({ "message": self.message() }),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request failed with {}: {}", status, self);
        }
        (status, Json(self.body())).into_response()
    }
}

/**
 * Backend Error Types
 *
 * Errors returned by the `/local` form routes. Each variant maps to one
 * HTTP status and a JSON body; see `conversion.rs` for the response shape.
 *
 * # Error Categories
 *
 * ## Validation
 *
 * The request body failed field validation. Nothing was sent upstream.
 *
 * ## Upstream
 *
 * The booking backend answered with an error, answered with something
 * that is not JSON, timed out, or could not be reached.
 *
 * ## Upload
 *
 * The artwork upload was missing, not a PNG, too large, or could not be
 * written to disk.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::api_client::ApiError;
use crate::shared::SharedError;

/// Message used whenever the backend answered with something that is not JSON
pub const UNEXPECTED_FORMAT_MESSAGE: &str = "Backend API returned an unexpected response format";

/// Machine-readable code attached to gateway timeout responses
pub const BACKEND_TIMEOUT_CODE: &str = "BACKEND_TIMEOUT";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use spotbook::backend::error::BackendError;
///
/// let err = BackendError::upload(StatusCode::PAYLOAD_TOO_LARGE, "File exceeds the 5MB limit");
/// assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Call to the booking backend failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Artwork upload rejected or not stored
    #[error("Upload error: {message}")]
    Upload {
        status: StatusCode,
        message: String,
    },

    /// Local filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    pub fn upload(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Upload {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Api` - upstream status for HTTP errors, 422 for a 2xx carrying an
    ///   error indicator, 502 when the backend was unreachable or spoke
    ///   something other than JSON on a 2xx, 504 on timeout
    /// - `Upload` - status from the error
    /// - `Io` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Api(err) => match err {
                ApiError::Status { status, .. } => *status,
                ApiError::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::UnexpectedFormat { status } if !status.is_success() => *status,
                ApiError::UnexpectedFormat { .. } => StatusCode::BAD_GATEWAY,
                ApiError::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
                ApiError::Unavailable { .. } => StatusCode::BAD_GATEWAY,
            },
            Self::Upload { status, .. } => *status,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the visitor
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.public_message().to_string(),
            Self::Api(err) => match err {
                ApiError::Status { .. } | ApiError::Rejected { .. } => err.to_string(),
                ApiError::UnexpectedFormat { .. } => UNEXPECTED_FORMAT_MESSAGE.to_string(),
                ApiError::GatewayTimeout => {
                    "The booking service took too long to respond. Your request may still have been processed."
                        .to_string()
                }
                ApiError::Unavailable { .. } => "Booking service is unavailable".to_string(),
            },
            Self::Upload { message, .. } => message.clone(),
            Self::Io(_) => "Internal server error".to_string(),
        }
    }
}

/**
 * Backend Client Errors
 *
 * Every way a call to the booking backend can fail, as seen by a handler.
 */
use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream answered 4xx/5xx with a JSON body
    #[error("backend returned {status}")]
    Status {
        status: StatusCode,
        body: Value,
    },

    /// Upstream answered 2xx but the body carries an error indicator
    #[error("backend rejected the request: {body}")]
    Rejected {
        body: Value,
    },

    /// Upstream answered with something other than JSON
    #[error("backend returned an unexpected response format ({status})")]
    UnexpectedFormat {
        status: StatusCode,
    },

    /// Upstream (or a proxy in front of it) timed out; the mutation may
    /// still have gone through
    #[error("backend timed out")]
    GatewayTimeout,

    /// The request never produced a usable response
    #[error("backend unavailable: {message}")]
    Unavailable {
        message: String,
    },
}

impl ApiError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::GatewayTimeout
        } else {
            Self::unavailable(err.to_string())
        }
    }
}

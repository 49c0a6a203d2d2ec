//! Form Handlers
//!
//! The `/local/*` routes called by the page scripts. Each handler validates
//! the submission, forwards a cleaned payload to the booking backend and
//! relays the backend's answer.
//!
//! # Response Contract
//!
//! - validation failure → 400 `{"message": ...}`, backend not contacted
//! - backend success → 200 with the backend body verbatim (204 if empty)
//! - backend failure → see `BackendError`
//!
//! # Module Structure
//!
//! ```text
//! forms/
//! ├── mod.rs          - Shared relay helpers
//! ├── reservation.rs  - Reserve and cancel
//! ├── waitlist.rs     - Waitlist join
//! ├── access.rs       - Forgotten link, access re-validation
//! └── upload.rs       - Artwork upload
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::api_client::ApiResponse;
use crate::backend::error::BackendError;
use crate::shared::SharedError;

pub mod access;
pub mod reservation;
pub mod upload;
pub mod waitlist;

pub use access::{forgotten_calendar, validate_access};
pub use reservation::{cancel_reservation, reserve};
pub use upload::upload_artwork;
pub use waitlist::join_waitlist;

/// Relay a successful backend answer to the browser
pub fn relay(response: ApiResponse) -> Response {
    match response.body {
        Some(body) => (StatusCode::OK, Json(body)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Unwrap a JSON body, turning extractor rejections into a 400 with a
/// `message`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| SharedError::serialization(rejection.body_text()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_body() {
        let response = relay(ApiResponse {
            status: StatusCode::CREATED,
            body: Some(json!({"id": "w1"})),
        });
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_relay_no_content() {
        let response = relay(ApiResponse {
            status: StatusCode::NO_CONTENT,
            body: None,
        });
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

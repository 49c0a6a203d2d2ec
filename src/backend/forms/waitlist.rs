/**
 * Waitlist Form Handler
 *
 * `POST /local/waitlist/join`
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Json, Response},
};

use crate::backend::api_client::ApiClient;
use crate::backend::error::BackendError;
use crate::backend::forms::{json_body, relay};
use crate::shared::waitlist::WaitlistRequest;

/// Put the visitor on the waitlist of a calendar (optionally for one spot)
///
/// # Errors
///
/// * `400 Bad Request` - required field missing, bad email, short name,
///   unparseable or inverted dates
pub async fn join_waitlist(
    State(api): State<ApiClient>,
    payload: Result<Json<WaitlistRequest>, JsonRejection>,
) -> Result<Response, BackendError> {
    let payload = json_body(payload)?.validate()?;
    tracing::info!("Waitlist entry for calendar {}", payload.calendar_url);

    let response = api.join_waitlist(&payload).await?;
    Ok(relay(response))
}

/**
 * Calendar Access Form Handlers
 *
 * - `POST /local/calendar/forgotten` - email the visitor their calendar links
 * - `POST /local/calendar/validate-access` - explicit re-authorization for a
 *   restricted calendar; stores an access grant on success
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{Json, Response},
};

use crate::backend::error::BackendError;
use crate::backend::forms::{json_body, relay};
use crate::backend::server::state::AppState;
use crate::shared::access::{ForgottenCalendarRequest, ValidateAccessRequest};

pub async fn forgotten_calendar(
    State(state): State<AppState>,
    payload: Result<Json<ForgottenCalendarRequest>, JsonRejection>,
) -> Result<Response, BackendError> {
    let payload = json_body(payload)?.validate()?;
    tracing::info!("Calendar link recovery requested");

    let response = state.api.forgotten_calendar(&payload).await?;
    Ok(relay(response))
}

/// Re-authorize a visitor for a restricted calendar
///
/// On backend success the `access-allowed` cookie is set for
/// `calendarURL`, so the next `GET /{slug}` shows the calendar.
pub async fn validate_access(
    State(state): State<AppState>,
    payload: Result<Json<ValidateAccessRequest>, JsonRejection>,
) -> Result<Response, BackendError> {
    let payload = json_body(payload)?.validate()?;

    let response = state.api.validate_access(&payload).await?;
    tracing::info!("Access validated for calendar '{}'", payload.calendar_url);

    let mut response = relay(response);
    if let Some(cookie) = state.gate.grant_header(&payload.calendar_url) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    Ok(response)
}

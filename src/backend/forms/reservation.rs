/**
 * Reservation Form Handlers
 *
 * - `POST /local/reserve`
 * - `DELETE /local/reservation/delete/{reservation_id}`
 */
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    response::{Json, Response},
};

use crate::backend::api_client::ApiClient;
use crate::backend::error::BackendError;
use crate::backend::forms::{json_body, relay};
use crate::shared::reservation::{CancelReservationRequest, ReservationRequest};
use crate::shared::SharedError;

/// Reserve a spot
///
/// # Example Request
///
/// ```http
/// POST /local/reserve HTTP/1.1
/// Content-Type: application/json
///
/// {"spotId": "s1", "visitorName": "Alice", "visitorEmail": "alice@example.com"}
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - `spotId` missing, name too short, malformed email
/// * upstream status - the backend refused the reservation
pub async fn reserve(
    State(api): State<ApiClient>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> Result<Response, BackendError> {
    let payload = json_body(payload)?.validate()?;
    tracing::info!("Reserving spot {}", payload.spot_id);

    let response = api.reserve_spot(&payload).await?;
    Ok(relay(response))
}

/// Cancel a reservation. The body (`{"reason": ...}`) is optional.
pub async fn cancel_reservation(
    State(api): State<ApiClient>,
    Path(reservation_id): Path<String>,
    body: Bytes,
) -> Result<Response, BackendError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CancelReservationRequest::default()
    } else {
        serde_json::from_slice::<CancelReservationRequest>(&body).map_err(SharedError::from)?
    };
    tracing::info!("Cancelling reservation {}", reservation_id);

    let response = api
        .delete_reservation(&reservation_id, &request.normalize())
        .await?;
    Ok(relay(response))
}

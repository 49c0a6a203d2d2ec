/**
 * Reservation Page Handlers
 *
 * - `GET /reserve/{spot_id}` - reservation form
 * - `GET /reservation/{reservation_id}` - reservation detail
 */
use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use crate::backend::api_client::ApiError;
use crate::backend::error::PageError;
use crate::backend::server::state::AppState;
use crate::backend::views;
use crate::shared::reservation::ReserveFormQuery;

/// Reservation form. Purely presentational: the spot details come from the
/// link on the calendar page.
pub async fn reserve_form(
    Path(spot_id): Path<String>,
    Query(query): Query<ReserveFormQuery>,
) -> Html<String> {
    Html(views::reservation::reserve_form(&spot_id, &query))
}

/// Whether the backend answered, but not with a usable reservation
fn is_not_ok(err: &ApiError) -> bool {
    match err {
        ApiError::Status { .. } | ApiError::Rejected { .. } => true,
        ApiError::UnexpectedFormat { status } => !status.is_success(),
        ApiError::GatewayTimeout | ApiError::Unavailable { .. } => false,
    }
}

/// Reservation detail
///
/// # Errors
///
/// * `404 Not Found` - the backend did not return the reservation
/// * `500 Internal Server Error` - the backend was unreachable, timed out or
///   returned a body that is not a reservation
pub async fn reservation_page(
    State(state): State<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Html<String>, PageError> {
    tracing::debug!("Loading reservation {}", reservation_id);

    match state.api.fetch_reservation(&reservation_id).await {
        Ok(detail) => {
            let ics_url = detail.absolute_ics_url(&state.config.api_endpoint);
            tracing::debug!(
                "Reservation {} loaded (dates: {}, ics: {})",
                reservation_id,
                detail.reservation.best_guess_start_date.is_some(),
                ics_url.is_some()
            );
            Ok(Html(views::reservation::detail(&detail, ics_url.as_deref())))
        }
        Err(e) if is_not_ok(&e) => {
            tracing::warn!("Reservation {} not available: {}", reservation_id, e);
            Err(PageError::not_found_titled("Reservation Not Found"))
        }
        Err(e) => {
            tracing::error!("Error fetching reservation {}: {}", reservation_id, e);
            Err(PageError::internal(
                "An error occurred while loading the reservation details.",
            ))
        }
    }
}

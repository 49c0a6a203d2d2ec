/**
 * Form Routes
 *
 * JSON endpoints under `/local`, called from the page scripts.
 *
 * - `POST /local/reserve`
 * - `DELETE /local/reservation/delete/{reservation_id}`
 * - `POST /local/waitlist/join`
 * - `POST /local/calendar/forgotten`
 * - `POST /local/calendar/validate-access`
 * - `POST /local/artworks/upload` (multipart)
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, post},
    Router,
};

use crate::backend::forms::upload::UPLOAD_BODY_LIMIT;
use crate::backend::forms::{
    cancel_reservation, forgotten_calendar, join_waitlist, reserve, upload_artwork,
    validate_access,
};
use crate::backend::server::state::AppState;

/// Configure form routes
///
/// The upload route gets its own body limit; every other route keeps
/// Axum's default.
pub fn configure_local_routes(router: Router<AppState>) -> Router<AppState> {
    let local = Router::new()
        .route("/reserve", post(reserve))
        .route(
            "/reservation/delete/{reservation_id}",
            delete(cancel_reservation),
        )
        .route("/waitlist/join", post(join_waitlist))
        .route("/calendar/forgotten", post(forgotten_calendar))
        .route("/calendar/validate-access", post(validate_access))
        .route(
            "/artworks/upload",
            post(upload_artwork).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        );

    router.nest("/local", local)
}

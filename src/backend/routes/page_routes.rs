/**
 * Page Routes
 *
 * - `GET /` - home
 * - `GET /about` - about
 * - `GET /artworks` - artwork gallery
 * - `GET /reserve/{spot_id}` - reservation form
 * - `GET /reservation/{reservation_id}` - reservation detail
 * - `GET /{slug}` - calendar (gated, never cached)
 */

use axum::{middleware::from_fn, routing::get, Router};

use crate::backend::middleware::no_cache;
use crate::backend::pages::{about, artworks, calendar_page, home, reservation_page, reserve_form};
use crate::backend::server::state::AppState;

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/about", get(about))
        .route("/artworks", get(artworks))
        .route("/reserve/{spot_id}", get(reserve_form))
        .route("/reservation/{reservation_id}", get(reservation_page))
        .route("/{slug}", get(calendar_page).layer(from_fn(no_cache)))
}

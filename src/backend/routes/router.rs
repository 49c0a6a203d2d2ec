/**
 * Router Configuration
 *
 * Combines page routes, form routes, static files and the 404 fallback
 * into a single Axum router.
 *
 * # Route Order
 *
 * 1. Form routes under `/local`
 * 2. Page routes (the catch-all `/{slug}` calendar route loses to every
 *    static path)
 * 3. Static files under `/static`
 * 4. Fallback handler (404 page)
 */

use axum::{extract::Request, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

use crate::backend::error::not_found_page;
use crate::backend::routes::local_routes::configure_local_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (configuration, backend client, gate)
///
/// # Static Files
///
/// Served from `STATIC_ROOT` under `/static`; uploaded artworks therefore
/// live at `/static/artworks/<file>`.
///
/// # Tracing
///
/// Every request runs in a span carrying a fresh request id.
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_files = ServeDir::new(&app_state.config.static_root);

    let router = Router::new();
    let router = configure_local_routes(router);
    let router = configure_page_routes(router);

    router
        .nest_service("/static", static_files)
        .fallback(not_found_page)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http().make_span_with(
                |request: &Request| {
                    tracing::info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            )),
        )
        .with_state(app_state)
}

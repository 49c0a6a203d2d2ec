/**
 * Server Initialization
 *
 * Builds the application state from a validated configuration and
 * assembles the router.
 *
 * # Initialization Process
 *
 * 1. Create the backend HTTP client
 * 2. Choose plain or signed access grants
 * 3. Make sure the artworks directory exists
 * 4. Create the router
 */

use axum::Router;

use crate::backend::api_client::ApiError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when the HTTP client cannot be constructed (for example a
/// broken TLS backend). A missing artworks directory is logged and created
/// lazily later.
pub async fn create_app(config: AppConfig) -> Result<Router, ApiError> {
    tracing::info!("Initializing spotbook front end");

    let state = AppState::new(config)?;

    if let Err(e) = tokio::fs::create_dir_all(state.artworks.dir()).await {
        tracing::warn!(
            "Could not create artworks directory {}: {}",
            state.artworks.dir().display(),
            e
        );
    }

    if state.gate.grants().is_signed() {
        tracing::info!("Access grants are signed");
    } else {
        tracing::info!("Access grants are plain calendar slugs");
    }

    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}

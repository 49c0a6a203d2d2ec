/**
 * Application State Management
 *
 * `AppState` is created once at startup and cloned into every handler. It
 * holds no mutable state: configuration, the backend HTTP client (which
 * pools connections internally), the access gate and the artwork store.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the piece they
 * need, following Axum's recommended pattern.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use spotbook::backend::api_client::ApiClient;
 *
 * async fn handler(State(api): State<ApiClient>) {
 *     let _ = api.fetch_calendar("pool-a").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::access::{AccessGate, GrantIssuer};
use crate::backend::api_client::{ApiClient, ApiError};
use crate::backend::artworks::ArtworkStore;
use crate::shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide configuration
    pub config: Arc<AppConfig>,

    /// Client for the booking backend
    pub api: ApiClient,

    /// Restricted-calendar access gate
    pub gate: AccessGate,

    /// Uploaded artwork storage
    pub artworks: ArtworkStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config)?;
        let grants = GrantIssuer::from_secret(config.grant_secret.as_deref());
        let gate = AccessGate::new(grants, config.environment.is_production());
        let artworks = ArtworkStore::new(config.artworks_dir());

        Ok(Self {
            config: Arc::new(config),
            api,
            gate,
            artworks,
        })
    }
}

impl FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

impl FromRef<AppState> for ArtworkStore {
    fn from_ref(state: &AppState) -> Self {
        state.artworks.clone()
    }
}

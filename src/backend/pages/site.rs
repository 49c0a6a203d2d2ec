/**
 * Site Page Handlers
 *
 * `GET /`, `GET /about` and `GET /artworks`.
 */
use axum::{extract::State, response::Html};

use crate::backend::artworks::ArtworkStore;
use crate::backend::error::PageError;
use crate::backend::views;

pub async fn home() -> Html<String> {
    Html(views::site::home())
}

pub async fn about() -> Html<String> {
    Html(views::site::about())
}

/// Artwork gallery
///
/// # Errors
///
/// * `500 Internal Server Error` - the artworks directory cannot be created
///   or read
pub async fn artworks(State(store): State<ArtworkStore>) -> Result<Html<String>, PageError> {
    let items = store.list().await.map_err(|e| {
        tracing::error!(
            "Error loading artworks from {}: {}",
            store.dir().display(),
            e
        );
        PageError::internal("Unable to load artworks")
    })?;
    tracing::debug!("Rendering gallery with {} artworks", items.len());
    Ok(Html(views::site::artworks(&items)))
}

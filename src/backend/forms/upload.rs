/**
 * Artwork Upload Handler
 *
 * `POST /local/artworks/upload` (multipart, file field `artwork`)
 *
 * # Checks
 *
 * 1. A file field named `artwork` is present
 * 2. Its declared content type is `image/png`
 * 3. It is no larger than 5 MB (checked while streaming)
 * 4. It starts with the PNG signature
 *
 * Accepted files are stored as `<unix-millis>-<sanitized name>.png` in the
 * artworks directory and become visible in the gallery immediately.
 */
use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::backend::artworks::{is_png, ArtworkStore, MAX_ARTWORK_BYTES};
use crate::backend::error::BackendError;

/// Multipart field carrying the image
pub const ARTWORK_FIELD: &str = "artwork";

/// Request body limit for the upload route: the file plus multipart framing
pub const UPLOAD_BODY_LIMIT: usize = MAX_ARTWORK_BYTES + 64 * 1024;

const NOT_PNG: &str = "Only PNG files are allowed";
const TOO_LARGE: &str = "File exceeds the 5MB limit";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub url: String,
}

fn multipart_error(err: MultipartError) -> BackendError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        BackendError::upload(StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE)
    } else {
        tracing::debug!("Malformed upload: {}", err.body_text());
        BackendError::upload(StatusCode::BAD_REQUEST, "Malformed upload")
    }
}

/// Read a field to the end, refusing to buffer more than the size limit
async fn read_limited(mut field: Field<'_>) -> Result<Vec<u8>, BackendError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if data.len() + chunk.len() > MAX_ARTWORK_BYTES {
            return Err(BackendError::upload(StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

pub async fn upload_artwork(
    State(store): State<ArtworkStore>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), BackendError> {
    let mut multipart = multipart
        .map_err(|rejection| BackendError::upload(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(ARTWORK_FIELD) {
            continue;
        }

        let declared_png = field
            .content_type()
            .is_some_and(|ct| ct.eq_ignore_ascii_case("image/png"));
        if !declared_png {
            return Err(BackendError::upload(StatusCode::BAD_REQUEST, NOT_PNG));
        }
        let original_name = field.file_name().unwrap_or_default().to_string();

        let data = read_limited(field).await?;
        if data.is_empty() {
            return Err(BackendError::upload(StatusCode::BAD_REQUEST, "No file uploaded"));
        }
        if !is_png(&data) {
            return Err(BackendError::upload(StatusCode::BAD_REQUEST, NOT_PNG));
        }

        let saved = store.save_png(&original_name, &data).await?;
        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                filename: saved.filename,
                url: saved.url,
            }),
        ));
    }

    Err(BackendError::upload(StatusCode::BAD_REQUEST, "No file uploaded"))
}

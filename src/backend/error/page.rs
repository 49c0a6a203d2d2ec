/**
 * Page Errors
 *
 * Errors for browser-facing routes. These render the HTML error page
 * instead of a JSON body, so visitors never see raw upstream failures.
 */

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::views::site::error_page;

#[derive(Debug, Error)]
pub enum PageError {
    /// 404 page with the given heading
    #[error("{title}")]
    NotFound { title: String },

    /// 500 page with a short explanation
    #[error("{title}: {message}")]
    Internal { title: String, message: String },
}

impl PageError {
    pub fn not_found() -> Self {
        Self::NotFound {
            title: "Page Not Found".to_string(),
        }
    }

    pub fn not_found_titled(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let html = match &self {
            Self::NotFound { title } => error_page(title, None),
            Self::Internal { title, message } => error_page(title, Some(message)),
        };
        (status, Html(html)).into_response()
    }
}

/// Fallback handler for unknown routes
pub async fn not_found_page() -> PageError {
    PageError::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PageError::not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PageError::internal("Unable to load artworks").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_renders_html() {
        let response = PageError::not_found_titled("Reservation Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
    }
}

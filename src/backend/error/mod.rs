//! Backend Error Module
//!
//! This module defines the errors returned by HTTP handlers and their
//! conversion into responses.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` for the JSON form routes
//! - **`conversion`** - `IntoResponse` for `BackendError`
//! - **`page`** - `PageError` for browser routes (HTML error pages)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - JSON response conversion
//! └── page.rs       - HTML error pages
//! ```
//!
//! # HTTP Response Conversion
//!
//! Both error types implement `IntoResponse`, so handlers return them
//! directly. Validation failures never reach the booking backend; upstream
//! failures are translated so raw transport errors never reach the client.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::response::Response;
//! use spotbook::backend::error::BackendError;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! // Handler can return BackendError directly
//! # Ok(Response::new("OK".into()))
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// HTML error pages
pub mod page;

pub use page::{not_found_page, PageError};
pub use types::BackendError;

//! Middleware Module
//!
//! Request processing shared by several routes.
//!
//! # Architecture
//!
//! - **`access`** - Extractor for the `access-allowed` grant cookie
//! - **`no_cache`** - Response headers forbidding caching of live pages
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn, routing::get, Router};
//! use spotbook::backend::middleware::no_cache;
//!
//! let router: Router = Router::new()
//!     .route("/live", get(|| async { "fresh" }))
//!     .route_layer(from_fn(no_cache));
//! ```

pub mod access;
pub mod no_cache;

pub use access::AccessCookies;
pub use no_cache::no_cache;

//! Backend Module
//!
//! All server-side code: the Axum application that renders pages, guards
//! restricted calendars and relays form submissions to the booking backend.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`pages`** - HTML page handlers
//! - **`forms`** - JSON form handlers under `/local`
//! - **`views`** - HTML rendering
//! - **`api_client`** - HTTP client for the booking backend
//! - **`access`** - Restricted-calendar access gate and grant cookie
//! - **`artworks`** - Artwork gallery storage
//! - **`middleware`** - Request extractors and response middleware
//! - **`error`** - Handler error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── pages/          - Page handlers
//! ├── forms/          - Form handlers
//! ├── views/          - HTML views
//! ├── api_client/     - Booking backend client
//! ├── access/         - Access gate
//! ├── artworks/       - Artwork storage
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! inbound request → route match → access gate (restricted calendars only)
//! → backend call → HTML page or JSON relay.
//!
//! # State Management
//!
//! `AppState` is built once at startup and never mutated. There is no
//! session store: access grants live entirely in the visitor's cookie.
//!
//! # Error Handling
//!
//! - `BackendError` for JSON routes (validation, upstream, upload)
//! - `PageError` for HTML routes (not-found and error pages)
//! - `ApiError` for the backend client

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Page handlers
pub mod pages;

/// Form handlers
pub mod forms;

/// HTML views
pub mod views;

/// Booking backend client
pub mod api_client;

/// Restricted calendar access
pub mod access;

/// Artwork storage
pub mod artworks;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::{BackendError, PageError};
pub use server::create_app;

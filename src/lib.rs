//! Spotbook - Booking Calendar Front End
//!
//! A server-side rendered web front end for a booking/calendar backend API.
//! It renders calendar, reservation and gallery pages, guards restricted
//! calendars with a cookie-based access grant, and forwards form
//! submissions (reservations, cancellations, waitlist entries, calendar link
//! recovery, artwork uploads) to the backend.
//!
//! # Module Structure
//!
//! - **`shared`** - Request/response types, validation, configuration
//! - **`backend`** - Axum server, backend client, access gate, views
//!
//! # Usage
//!
//! ```rust,no_run
//! use spotbook::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(load_config()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error`, `backend::api_client::error`
//!   and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

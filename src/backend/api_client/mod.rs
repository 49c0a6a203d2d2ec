//! Backend Client Module
//!
//! Everything the front end knows about talking to the booking backend.
//!
//! # Module Structure
//!
//! ```text
//! api_client/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - Generic request sending and response normalization
//! ├── endpoints.rs  - One method per upstream operation
//! └── error.rs      - ApiError
//! ```
//!
//! The backend owns all booking data and rules; this module only moves JSON
//! back and forth and classifies failures.

/// Generic request sending and response normalization
pub mod client;

/// Typed upstream operations
pub mod endpoints;

/// Upstream failure classification
pub mod error;

pub use client::{ApiClient, ApiResponse};
pub use error::ApiError;

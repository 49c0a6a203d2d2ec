//! Route Configuration Module
//!
//! Configures all HTTP routes of the front end.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`page_routes`** - HTML pages
//! - **`local_routes`** - JSON form endpoints under `/local`
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! ├── page_routes.rs   - Page routes
//! └── local_routes.rs  - Form routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use spotbook::backend::routes::create_router;
//! use spotbook::backend::server::AppState;
//! use spotbook::shared::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().api_endpoint("http://localhost:8080").build()?;
//! let router = create_router(AppState::new(config)?);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Page routes
pub mod page_routes;

/// Form routes
pub mod local_routes;

pub use router::create_router;

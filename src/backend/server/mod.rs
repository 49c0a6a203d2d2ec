//! Server Module
//!
//! Configuration loading, application state and app creation.
//!
//! # Architecture
//!
//! - **`config`** - `AppConfig` from environment variables
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - App creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment loading
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - App creation
//! ```
//!
//! # State Management
//!
//! `AppState` is immutable after startup. Nothing is shared between
//! requests except configuration, the backend HTTP client's connection
//! pool, the grant signing key and the artworks directory path.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotbook::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;

//! Common test utilities and helpers
//!
//! - An in-process app wired to a mock booking backend
//! - Canned backend responses
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod mock_backend;
pub mod test_app;

pub use mock_backend::*;
pub use test_app::*;

//! Shared Error Types
//!
//! This module defines error types that are shared between the request
//! payload types and the backend handlers. These errors represent failures
//! that are detected before any upstream call is made.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or malformed
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use spotbook::shared::error::SharedError;
//!
//! let error = SharedError::validation("visitorEmail", "visitorEmail must be a valid email format");
//! assert_eq!(error.public_message(), "visitorEmail must be a valid email format");
//! ```
use thiserror::Error;

/// Errors raised by shared payload types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Request field validation error
    ///
    /// `message` is the exact text returned to the visitor; it already names
    /// the offending field.
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the "`<field>` is required" validation error
    pub fn required(field: &str) -> Self {
        Self::validation(field, format!("{field} is required"))
    }

    /// The message shown to the client, without the internal prefix
    pub fn public_message(&self) -> &str {
        match self {
            Self::SerializationError { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

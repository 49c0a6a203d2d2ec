//! Shared Module
//!
//! This module contains the data types exchanged with visitors' browsers and
//! with the booking backend, together with the validation applied to them
//! before anything leaves the front end.
//!
//! # Overview
//!
//! Nothing in here performs I/O. Types are plain serde structures whose
//! field names follow the backend's JSON (`spotId`, `calendarURL`, ...).

/// Calendar snapshots and spot grouping
pub mod calendar;

/// Reservation requests and reservation detail
pub mod reservation;

/// Waitlist requests
pub mod waitlist;

/// Calendar access payloads (token verification, re-authorization, recovery)
pub mod access;

/// Field validation helpers
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use calendar::{Calendar, CalendarResponse, Spot, SpotGroup};
pub use reservation::{CancelReservationRequest, ReservationDetail, ReservationRequest, ReserveFormQuery};
pub use waitlist::WaitlistRequest;
pub use access::{CalendarQuery, ForgottenCalendarRequest, ValidateAccessRequest};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Environment};

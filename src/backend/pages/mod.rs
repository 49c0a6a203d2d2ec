//! Page Handlers
//!
//! Browser-facing routes that render HTML. Upstream failures are turned
//! into the not-found or error page; they are never relayed raw.
//!
//! - **`site`** - home, about, artwork gallery
//! - **`calendar`** - gated calendar view
//! - **`reservation`** - reservation form and detail

pub mod calendar;
pub mod reservation;
pub mod site;

pub use calendar::calendar_page;
pub use reservation::{reservation_page, reserve_form};
pub use site::{about, artworks, home};

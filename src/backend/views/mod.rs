//! Views
//!
//! Server-side HTML rendering. Pages are assembled from plain string
//! formatting; all dynamic values are escaped with [`layout::escape`].
//!
//! # Module Structure
//!
//! ```text
//! views/
//! ├── mod.rs         - Module exports
//! ├── layout.rs      - Document shell, escaping, link building
//! ├── site.rs        - Home, about, artworks, error pages
//! ├── calendar.rs    - Calendar and access-request pages
//! └── reservation.rs - Reservation form and detail pages
//! ```

pub mod calendar;
pub mod layout;
pub mod reservation;
pub mod site;

pub use layout::escape;

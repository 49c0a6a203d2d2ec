//! Artworks
//!
//! File-system storage for the artwork gallery: listing for `GET /artworks`
//! and PNG storage for `POST /local/artworks/upload`.

pub mod store;

pub use store::{is_png, sanitize_filename, Artwork, ArtworkStore, MAX_ARTWORK_BYTES};

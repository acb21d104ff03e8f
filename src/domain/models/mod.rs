//! Domain Models
//!
//! Pure domain entities and value objects representing gallery concepts.

pub mod photo;

pub use photo::{AlbumId, FetchParams, Photo, PhotoData, PhotoId, MAX_FETCH_LIMIT};

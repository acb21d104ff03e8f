//! Photo Gallery
//!
//! Gateway and use cases for browsing photos served by a Typicode-style
//! REST API, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

//! Domain Layer
//!
//! Contains the gallery domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::photo_gateway::PhotoGateway;
pub use models::photo::{AlbumId, FetchParams, Photo, PhotoData, PhotoId};

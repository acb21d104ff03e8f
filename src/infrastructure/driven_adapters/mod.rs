//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Photo API gateways (HTTP and in-memory)
//! - Configuration

pub mod config;
pub mod photo_gateway;

pub use config::AppConfig;
pub use photo_gateway::{build_gateway, FakePhotoGateway, HttpPhotoGateway};

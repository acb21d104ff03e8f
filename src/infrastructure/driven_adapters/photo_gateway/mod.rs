//! Photo Gateway Implementations
//!
//! The network-backed gateway and its in-memory stand-in, plus the factory
//! that picks one from configuration.

mod fake;
mod http;

use std::sync::Arc;

pub use fake::{FakePhotoGateway, STUB_ALBUM_ID, STUB_TITLE};
pub use http::{HttpPhotoGateway, PhotoDto};

use crate::domain::gateways::PhotoGateway;
use crate::infrastructure::driven_adapters::config::{ApiConfig, GatewayKind};
use crate::shared::errors::GatewayError;

/// Build the gateway selected by `config.gateway`
///
/// # Errors
///
/// Returns a configuration error if the HTTP gateway cannot be constructed.
pub fn build_gateway(config: &ApiConfig) -> Result<Arc<dyn PhotoGateway>, GatewayError> {
    match config.gateway {
        GatewayKind::Http => {
            tracing::info!(base_url = %config.base_url, "Using HTTP photo gateway");
            Ok(Arc::new(HttpPhotoGateway::from_config(config)?))
        }
        GatewayKind::Fake => {
            tracing::info!("Using in-memory photo gateway");
            Ok(Arc::new(FakePhotoGateway::new()))
        }
    }
}

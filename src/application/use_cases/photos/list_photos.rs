//! List Photos Use Case
//!
//! Retrieves the first page of photos of the gallery.

use std::sync::Arc;

use validator::Validate;

use crate::domain::gateways::PhotoGateway;
use crate::domain::models::photo::{FetchParams, Photo};
use crate::shared::errors::UseCaseError;

/// Use case for listing photos
pub struct ListPhotosUseCase {
    photo_gateway: Arc<dyn PhotoGateway>,
}

impl ListPhotosUseCase {
    /// Create a new ListPhotosUseCase
    #[must_use]
    pub fn new(photo_gateway: Arc<dyn PhotoGateway>) -> Self {
        Self { photo_gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the limit is out of range.
    /// Returns `UseCaseError::Gateway` if the photo source fails.
    pub async fn execute(&self, params: &FetchParams) -> Result<Vec<Photo>, UseCaseError> {
        params.validate()?;
        tracing::debug!(limit = params.limit(), "Listing photos");

        let photos = self.photo_gateway.fetch_photos(params).await?;

        tracing::debug!(count = photos.len(), "Photos listed");
        Ok(photos)
    }
}

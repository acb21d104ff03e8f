//! Get Photo By ID Use Case
//!
//! Retrieves a single photo by its ID.

use std::sync::Arc;

use crate::domain::gateways::PhotoGateway;
use crate::domain::models::photo::{Photo, PhotoId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a photo by ID
pub struct GetPhotoByIdUseCase {
    photo_gateway: Arc<dyn PhotoGateway>,
}

impl GetPhotoByIdUseCase {
    /// Create a new GetPhotoByIdUseCase
    #[must_use]
    pub fn new(photo_gateway: Arc<dyn PhotoGateway>) -> Self {
        Self { photo_gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a zero ID.
    /// Returns `UseCaseError::NotFound` if the photo doesn't exist.
    /// Returns `UseCaseError::Gateway` for any other gateway failure.
    pub async fn execute(&self, id: PhotoId) -> Result<Photo, UseCaseError> {
        if id.value() == 0 {
            return Err(UseCaseError::Validation(vec![format!(
                "Invalid photo ID '{id}' given"
            )]));
        }
        tracing::debug!(photo_id = %id, "Getting photo by ID");

        let photo = self.photo_gateway.fetch_photo(id).await.map_err(|e| {
            if e.is_not_found() {
                tracing::warn!(photo_id = %id, "Photo not found");
                UseCaseError::NotFound {
                    resource: "Photo".to_string(),
                    id: id.to_string(),
                }
            } else {
                UseCaseError::Gateway(e)
            }
        })?;

        tracing::debug!(photo_id = %id, "Photo found");
        Ok(photo)
    }
}

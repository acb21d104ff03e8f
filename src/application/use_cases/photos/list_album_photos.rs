//! List Album Photos Use Case
//!
//! Retrieves the photos belonging to one album.

use std::sync::Arc;

use validator::Validate;

use crate::domain::gateways::PhotoGateway;
use crate::domain::models::photo::{AlbumId, FetchParams, Photo};
use crate::shared::errors::UseCaseError;

/// Use case for listing the photos of an album
pub struct ListAlbumPhotosUseCase {
    photo_gateway: Arc<dyn PhotoGateway>,
}

impl ListAlbumPhotosUseCase {
    /// Create a new ListAlbumPhotosUseCase
    #[must_use]
    pub fn new(photo_gateway: Arc<dyn PhotoGateway>) -> Self {
        Self { photo_gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a zero album ID or an out of range limit.
    /// Returns `UseCaseError::Gateway` if the photo source fails.
    pub async fn execute(
        &self,
        album_id: AlbumId,
        params: &FetchParams,
    ) -> Result<Vec<Photo>, UseCaseError> {
        if album_id.value() == 0 {
            return Err(UseCaseError::Validation(vec![format!(
                "Invalid album ID '{album_id}' given"
            )]));
        }
        params.validate()?;
        tracing::debug!(album_id = %album_id, limit = params.limit(), "Listing album photos");

        let photos = self
            .photo_gateway
            .fetch_photos_by_album_id(album_id, params)
            .await?;

        tracing::debug!(album_id = %album_id, count = photos.len(), "Album photos listed");
        Ok(photos)
    }
}

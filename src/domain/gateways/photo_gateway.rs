//! Photo Gateway
//!
//! Abstract trait defining the contract for fetching photo data.

use async_trait::async_trait;

use crate::domain::models::photo::{AlbumId, FetchParams, Photo, PhotoId};
use crate::shared::errors::GatewayError;

/// Gateway trait for reading photos from an external source
#[async_trait]
pub trait PhotoGateway: Send + Sync {
    /// Fetch up to `params.limit()` photos
    async fn fetch_photos(&self, params: &FetchParams) -> Result<Vec<Photo>, GatewayError>;

    /// Fetch a single photo by its ID
    async fn fetch_photo(&self, id: PhotoId) -> Result<Photo, GatewayError>;

    /// Fetch up to `params.limit()` photos belonging to an album
    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        params: &FetchParams,
    ) -> Result<Vec<Photo>, GatewayError>;
}

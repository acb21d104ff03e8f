//! In-Memory Photo Gateway
//!
//! Test double for `PhotoGateway` returning seeded or synthetic photos
//! without touching the network.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::gateways::PhotoGateway;
use crate::domain::models::photo::{AlbumId, FetchParams, Photo, PhotoData, PhotoId};
use crate::shared::errors::GatewayError;

/// Album assigned to synthetic photos unless a call asks for another one
pub const STUB_ALBUM_ID: AlbumId = AlbumId::new(3);

/// Title carried by every synthetic photo
pub const STUB_TITLE: &str = "My Photo";

const STUB_URL: &str = "https://via.placeholder.com/600/92c952";
const STUB_THUMBNAIL_URL: &str = "https://via.placeholder.com/150/92c952";

#[derive(Debug, Default)]
struct FakeState {
    stubs: Vec<Photo>,
    error: Option<GatewayError>,
    calls: usize,
}

/// Fake implementation of `PhotoGateway`
///
/// Seeded photos take precedence over synthetic ones; an injected error takes
/// precedence over both. Configuration is read at call time.
#[derive(Debug, Default)]
pub struct FakePhotoGateway {
    state: Mutex<FakeState>,
}

impl FakePhotoGateway {
    /// Create a fake in synthetic mode with no error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the photos every operation should return
    ///
    /// An empty list switches back to synthetic mode.
    pub fn feed_with(&self, stubs: Vec<Photo>) {
        self.lock().stubs = stubs;
    }

    /// Make every operation fail with `error`
    pub fn set_error(&self, error: GatewayError) {
        self.lock().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.lock().error = None;
    }

    /// Drop seeds, error and call count
    pub fn reset(&self) {
        *self.lock() = FakeState::default();
    }

    /// Number of gateway operations invoked so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().calls
    }

    /// The template synthetic photos are derived from
    #[must_use]
    pub fn stub_photo() -> Photo {
        Photo::new(PhotoData {
            id: PhotoId::new(1),
            album_id: STUB_ALBUM_ID,
            title: STUB_TITLE.to_string(),
            url: STUB_URL.to_string(),
            thumbnail_url: STUB_THUMBNAIL_URL.to_string(),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeded photos, or `None` in synthetic mode
    fn begin_call(&self) -> Result<Option<Vec<Photo>>, GatewayError> {
        let mut state = self.lock();
        state.calls += 1;

        if let Some(error) = &state.error {
            return Err(error.clone());
        }
        if state.stubs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(state.stubs.clone()))
        }
    }

    fn synthesize(limit: u32) -> Vec<Photo> {
        let stub = Self::stub_photo();
        (1..=u64::from(limit))
            .map(|id| stub.with_id(PhotoId::new(id)))
            .collect()
    }
}

#[async_trait]
impl PhotoGateway for FakePhotoGateway {
    async fn fetch_photos(&self, params: &FetchParams) -> Result<Vec<Photo>, GatewayError> {
        if let Some(stubs) = self.begin_call()? {
            return Ok(stubs);
        }

        Ok(Self::synthesize(params.limit()))
    }

    async fn fetch_photo(&self, id: PhotoId) -> Result<Photo, GatewayError> {
        if let Some(mut stubs) = self.begin_call()? {
            return Ok(stubs.swap_remove(0));
        }

        Ok(Self::stub_photo().with_id(id))
    }

    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        params: &FetchParams,
    ) -> Result<Vec<Photo>, GatewayError> {
        if let Some(stubs) = self.begin_call()? {
            return Ok(stubs);
        }

        Ok(Self::synthesize(params.limit())
            .into_iter()
            .map(|photo| photo.with_album_id(album_id))
            .collect())
    }
}

//! Photo Domain Model
//!
//! Represents a single photo of the gallery and the parameters used to list photos.

use validator::Validate;

/// Upper bound accepted for a listing limit
pub const MAX_FETCH_LIMIT: u32 = 5000;

/// Newtype wrapper for Photo ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u64);

impl PhotoId {
    /// Create a PhotoId from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PhotoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Newtype wrapper for Album ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(u64);

impl AlbumId {
    /// Create an AlbumId from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AlbumId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Parameters for listing photos
///
/// The limit travels as `_limit` on the wire; that name belongs to the
/// upstream API and is applied by the HTTP adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct FetchParams {
    // Keep `max` in step with MAX_FETCH_LIMIT
    #[validate(range(min = 1, max = 5000, message = "limit must be between 1 and 5000"))]
    limit: u32,
}

impl FetchParams {
    /// Create parameters returning at most `limit` photos
    #[must_use]
    pub const fn with_limit(limit: u32) -> Self {
        Self { limit }
    }

    /// Maximum number of photos to return
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

/// Data required to create a Photo
#[derive(Debug, Clone)]
pub struct PhotoData {
    pub id: PhotoId,
    pub album_id: AlbumId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Photo domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: PhotoId,
    album_id: AlbumId,
    title: String,
    url: String,
    thumbnail_url: String,
}

impl Photo {
    /// Create a new Photo
    #[must_use]
    pub fn new(data: PhotoData) -> Self {
        Self {
            id: data.id,
            album_id: data.album_id,
            title: data.title,
            url: data.url,
            thumbnail_url: data.thumbnail_url,
        }
    }

    /// Copy of this photo carrying a different ID
    #[must_use]
    pub fn with_id(&self, id: PhotoId) -> Self {
        Self { id, ..self.clone() }
    }

    /// Copy of this photo assigned to a different album
    #[must_use]
    pub fn with_album_id(&self, album_id: AlbumId) -> Self {
        Self {
            album_id,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn id(&self) -> PhotoId {
        self.id
    }

    #[must_use]
    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }
}

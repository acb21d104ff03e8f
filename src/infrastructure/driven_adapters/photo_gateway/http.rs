//! HTTP Photo Gateway Implementation
//!
//! Implements the PhotoGateway trait against a Typicode-style REST API using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::gateways::PhotoGateway;
use crate::domain::models::photo::{AlbumId, FetchParams, Photo, PhotoData, PhotoId};
use crate::infrastructure::driven_adapters::config::ApiConfig;
use crate::shared::errors::GatewayError;

/// Wire representation of a photo as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub id: u64,
    pub album_id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl From<PhotoDto> for Photo {
    fn from(dto: PhotoDto) -> Self {
        Photo::new(PhotoData {
            id: PhotoId::new(dto.id),
            album_id: AlbumId::new(dto.album_id),
            title: dto.title,
            url: dto.url,
            thumbnail_url: dto.thumbnail_url,
        })
    }
}

impl From<&Photo> for PhotoDto {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id().value(),
            album_id: photo.album_id().value(),
            title: photo.title().to_string(),
            url: photo.url().to_string(),
            thumbnail_url: photo.thumbnail_url().to_string(),
        }
    }
}

/// Query string accepted by the listing routes
#[derive(Debug, Serialize)]
struct ListingQuery {
    #[serde(rename = "_limit")]
    limit: u32,
}

impl From<&FetchParams> for ListingQuery {
    fn from(params: &FetchParams) -> Self {
        Self {
            limit: params.limit(),
        }
    }
}

/// reqwest implementation of PhotoGateway
pub struct HttpPhotoGateway {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpPhotoGateway {
    /// Create a gateway for `base_url` with a default client
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` if the URL is empty, malformed
    /// or not http(s).
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a gateway using an existing client
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` if the URL is empty, malformed
    /// or not http(s).
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, GatewayError> {
        let base_url = validate_base_url(base_url)?;
        tracing::debug!(base_url = %base_url, "Photo gateway configured");
        Ok(Self { base_url, client })
    }

    /// Create a gateway from the API configuration
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` for a bad base URL and
    /// `GatewayError::Client` for a zero timeout or if the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, GatewayError> {
        // Validate before building the client so a bad URL is reported first
        validate_base_url(&config.base_url)?;
        if config.timeout_secs == 0 {
            return Err(GatewayError::Client(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Self::with_client(&config.base_url, client)
    }

    /// Get the validated base URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), route)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        route: &str,
        params: Option<&FetchParams>,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(route);
        tracing::debug!(%url, limit = params.map(FetchParams::limit), "Requesting photo API");

        let mut request = self.client.get(&url);
        if let Some(params) = params {
            request = request.query(&ListingQuery::from(params));
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Photo API request failed");
            GatewayError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!(%url, error = %e, "Failed to read photo API error body");
                format!("<unreadable body: {e}>")
            });
            tracing::warn!(%url, status = status.as_u16(), "Photo API returned error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Failed to decode photo API response");
            GatewayError::Decode(e.to_string())
        })
    }
}

fn validate_base_url(base_url: &str) -> Result<Url, GatewayError> {
    let invalid = || GatewayError::InvalidBaseUrl {
        base_url: base_url.to_string(),
    };

    let url = Url::parse(base_url).map_err(|_| invalid())?;
    // Routes are appended to the path, so a query or fragment would swallow them
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}

#[async_trait]
impl PhotoGateway for HttpPhotoGateway {
    async fn fetch_photos(&self, params: &FetchParams) -> Result<Vec<Photo>, GatewayError> {
        let photos: Vec<PhotoDto> = self.get("/photos", Some(params)).await?;
        Ok(photos.into_iter().map(Photo::from).collect())
    }

    async fn fetch_photo(&self, id: PhotoId) -> Result<Photo, GatewayError> {
        let photo: PhotoDto = self.get(&format!("/photos/{id}"), None).await?;
        Ok(photo.into())
    }

    async fn fetch_photos_by_album_id(
        &self,
        album_id: AlbumId,
        params: &FetchParams,
    ) -> Result<Vec<Photo>, GatewayError> {
        let photos: Vec<PhotoDto> = self
            .get(&format!("/albums/{album_id}/photos"), Some(params))
            .await?;
        Ok(photos.into_iter().map(Photo::from).collect())
    }
}

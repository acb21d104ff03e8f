//! Photo Gallery - Main Entry Point
//!
//! Loads the configured photo listing and prints it as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photo_gallery::application::use_cases::photos::{ListAlbumPhotosUseCase, ListPhotosUseCase};
use photo_gallery::domain::models::photo::{AlbumId, FetchParams};
use photo_gallery::infrastructure::driven_adapters::config::AppConfig;
use photo_gallery::infrastructure::driven_adapters::photo_gateway::{build_gateway, PhotoDto};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_gallery=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create gateway
    let photo_gateway = build_gateway(&config.api)?;

    let params = FetchParams::with_limit(config.gallery.default_limit);
    let photos = match config.gallery.album_id {
        Some(album_id) => {
            ListAlbumPhotosUseCase::new(photo_gateway)
                .execute(AlbumId::new(album_id), &params)
                .await?
        }
        None => ListPhotosUseCase::new(photo_gateway).execute(&params).await?,
    };
    tracing::info!(count = photos.len(), "Photos loaded");

    let dtos: Vec<PhotoDto> = photos.iter().map(PhotoDto::from).collect();
    println!("{}", serde_json::to_string_pretty(&dtos)?);

    Ok(())
}

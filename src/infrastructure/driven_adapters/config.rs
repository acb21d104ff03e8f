//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Which `PhotoGateway` implementation to wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    #[default]
    Http,
    Fake,
}

/// Photo API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub gateway: GatewayKind,
}

/// Gallery listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default)]
    pub album_id: Option<u64>,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub gallery: GalleryConfig,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("PhotoGallery/{}", env!("CARGO_PKG_VERSION"))
}

fn default_limit() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::from_builder(
            Config::builder()
                // Start with default config
                .add_source(File::with_name("config/default").required(true))
                // Merge environment-specific config if it exists
                .add_source(File::with_name(&format!("config/{run_mode}")).required(false)),
        )
    }

    /// Finish a builder with environment overrides (e.g., `APP__API__BASE_URL`)
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CARTWHEEL_API_URL` - Base URL of the storefront backend serving
//!   `/stock/{id}` and `/products/{id}` (default: `http://localhost:3333`)
//! - `CARTWHEEL_STORE_PATH` - Path of the local key-value store file
//!   (default: `cartwheel.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Base URL of the storefront backend.
    pub api_url: Url,
    /// Path of the local key-value store file.
    pub store_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Every variable has a default, so loading only fails on malformed
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CARTWHEEL_API_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("CARTWHEEL_API_URL", "http://localhost:3333");
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("CARTWHEEL_API_URL".to_string(), e.to_string()))?;

        let store_path = PathBuf::from(get_env_or_default("CARTWHEEL_STORE_PATH", "cartwheel.json"));

        Ok(Self {
            api_url,
            store_path,
        })
    }
}

/// Get an environment variable or a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

//! HTTP client for the storefront backend's stock and catalog endpoints.
//!
//! The backend exposes a flat JSON REST surface:
//!
//! - `GET /stock/{id}` -> `{ "id": 1, "amount": 5 }`
//! - `GET /products/{id}` -> `{ "id": 1, "title": ..., "price": ..., "image": ... }`
//!
//! The [`Inventory`] and [`Catalog`] traits are the seams the cart store
//! depends on; [`ApiClient`] implements both against the real backend, and
//! tests substitute in-memory fakes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use cartwheel_core::{Product, ProductId, StockInfo};

use crate::config::CartConfig;

/// Errors that can occur when querying the storefront backend.
///
/// The cart store does not distinguish these variants - any lookup failure
/// aborts the operation with a generic notification - but keeping them
/// separate makes the tracing output useful.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed (connect, timeout, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read-only access to current stock counts.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Current available quantity for a product.
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, LookupError>;
}

/// Read-only access to product display metadata.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Display metadata for a product.
    async fn product(&self, product_id: ProductId) -> Result<Product, LookupError>;
}

/// Client for the storefront backend REST API.
///
/// No caching, no retries, no request timeout: a failed or slow lookup is
/// terminal for that cart operation and recovered only by the user
/// re-triggering it.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new backend API client.
    #[must_use]
    pub fn new(config: &CartConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    /// Execute a GET request and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        debug!(%url, "backend lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Inventory for ApiClient {
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, LookupError> {
        self.get_json(&format!("stock/{product_id}")).await
    }
}

#[async_trait]
impl Catalog for ApiClient {
    async fn product(&self, product_id: ProductId) -> Result<Product, LookupError> {
        self.get_json(&format!("products/{product_id}")).await
    }
}

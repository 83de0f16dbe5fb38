//! Catalog product metadata and stock snapshots.
//!
//! Both types mirror the JSON shape served by the storefront backend, so
//! they deserialize straight off the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// Product metadata as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. Decimal to preserve precision across serialization.
    pub price: Decimal,
    /// Product image URL.
    #[serde(rename = "image")]
    pub image_url: String,
}

/// Available stock for a product at query time.
///
/// Transient: fetched per validation and never cached, so a stale value
/// only lives for the duration of one cart operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    /// Product this count applies to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Maximum purchasable quantity right now.
    pub amount: i64,
}

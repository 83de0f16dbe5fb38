//! Internal failure taxonomy for cart operations.
//!
//! The external contract is a single notification channel: callers never
//! see these values. They exist so the failure kinds stay distinguishable
//! inside the crate (and in tests) instead of being collapsed to strings
//! at the point of failure.

use thiserror::Error;

use cartwheel_core::ProductId;

use crate::api::LookupError;

/// Why a cart operation was aborted.
///
/// Every variant leaves the cart unchanged; the store converts each into
/// a user-facing notification and nothing else.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds the stock observed for the product.
    #[error("requested quantity exceeds available stock")]
    OutOfStock,

    /// A remote inventory or catalog lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The operation targeted a product with no entry in the cart.
    #[error("no cart entry for product {0}")]
    EntryNotFound(ProductId),
}

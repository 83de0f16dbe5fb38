//! The cart store: single writer over the in-memory cart.
//!
//! Every public operation follows the same shape: validate against live
//! inventory, build the next cart value, commit it, persist. Failures are
//! absorbed into a notification and never reach the caller; the cart is
//! left untouched on any failure.

use std::sync::Arc;

use tracing::{debug, warn};

use cartwheel_core::{Cart, CartEntry, ProductId};

use crate::api::{Catalog, Inventory};
use crate::error::CartError;
use crate::notify::Notifier;
use crate::storage::KeyValueStore;

/// The fixed key the serialized cart is persisted under.
pub const STORAGE_KEY: &str = "cart";

/// User-facing notification messages.
pub mod messages {
    /// Requested quantity exceeds available stock.
    pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
    /// Generic add failure (lookup error).
    pub const ADD_FAILED: &str = "Could not add product to cart";
    /// Generic remove failure (entry not found).
    pub const REMOVE_FAILED: &str = "Could not remove product from cart";
    /// Generic update failure (lookup error or entry not found).
    pub const UPDATE_FAILED: &str = "Could not update product quantity";
}

/// Cart state manager.
///
/// Owns the cart exclusively; collaborators are injected at construction.
/// Operations take `&mut self`, so interleaved mutations of the same store
/// are ruled out statically - there is no locking and no queue.
pub struct CartStore {
    inventory: Arc<dyn Inventory>,
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    cart: Cart,
    /// Last snapshot written to (or read from) storage. Commits skip the
    /// write when the serialization is unchanged.
    persisted: Option<String>,
}

impl CartStore {
    /// Create a store, restoring the cart persisted under [`STORAGE_KEY`].
    ///
    /// Absent or malformed persisted data yields an empty cart; loading
    /// never fails. Restored quantities are accepted as-is - no inventory
    /// re-validation happens at load time.
    #[must_use]
    pub fn load(
        inventory: Arc<dyn Inventory>,
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (cart, persisted) = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => (cart, Some(raw)),
                Err(e) => {
                    warn!(error = %e, "persisted cart is malformed, starting empty");
                    (Cart::new(), None)
                }
            },
            Ok(None) => (Cart::new(), None),
            Err(e) => {
                warn!(error = %e, "could not read persisted cart, starting empty");
                (Cart::new(), None)
            }
        };

        Self {
            inventory,
            catalog,
            storage,
            notifier,
            cart,
            persisted,
        }
    }

    /// The current cart snapshot.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product to the cart.
    ///
    /// Increments the existing entry if present, otherwise fetches catalog
    /// metadata and appends a new entry with amount 1. Aborts with a
    /// notification if the target quantity exceeds current stock or a
    /// remote lookup fails.
    pub async fn add_product(&mut self, product_id: ProductId) {
        if let Err(err) = self.try_add_product(product_id).await {
            self.report(&err, messages::ADD_FAILED);
        }
    }

    async fn try_add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let stock = self.inventory.stock(product_id).await?;

        let amount = self.cart.amount_of(product_id) + 1;
        if amount > stock.amount {
            return Err(CartError::OutOfStock);
        }

        let mut next = self.cart.clone();
        if !next.set_amount(product_id, amount) {
            let product = self.catalog.product(product_id).await?;
            next.push(CartEntry::from_product(product, amount));
        }

        self.commit(next);
        Ok(())
    }

    /// Remove a product's entry from the cart.
    ///
    /// Targets the whole entry regardless of quantity. Aborts with a
    /// notification if the product is not in the cart.
    pub fn remove_product(&mut self, product_id: ProductId) {
        let mut next = self.cart.clone();
        if next.remove(product_id) {
            self.commit(next);
        } else {
            self.report(&CartError::EntryNotFound(product_id), messages::REMOVE_FAILED);
        }
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// `amount <= 0` is a silent no-op: no mutation and no notification.
    /// Decrement UIs are expected to call [`Self::remove_product`] instead
    /// of driving the quantity to zero through this path.
    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: i64) {
        if amount <= 0 {
            return;
        }

        if let Err(err) = self.try_update_amount(product_id, amount).await {
            self.report(&err, messages::UPDATE_FAILED);
        }
    }

    async fn try_update_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let stock = self.inventory.stock(product_id).await?;

        if amount > stock.amount {
            return Err(CartError::OutOfStock);
        }

        let mut next = self.cart.clone();
        if !next.set_amount(product_id, amount) {
            return Err(CartError::EntryNotFound(product_id));
        }

        self.commit(next);
        Ok(())
    }

    /// Replace the cart with a new value and persist the snapshot.
    fn commit(&mut self, next: Cart) {
        self.cart = next;
        self.persist();
    }

    /// Write the serialized cart under [`STORAGE_KEY`] if it differs from
    /// the last persisted snapshot.
    ///
    /// Write failures are logged and otherwise swallowed: the commit
    /// stands, and the stale snapshot on disk is overwritten by the next
    /// successful write.
    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.cart) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "could not serialize cart snapshot");
                return;
            }
        };

        if self.persisted.as_deref() == Some(snapshot.as_str()) {
            debug!("cart snapshot unchanged, skipping write");
            return;
        }

        match self.storage.set(STORAGE_KEY, &snapshot) {
            Ok(()) => self.persisted = Some(snapshot),
            Err(e) => warn!(error = %e, "could not persist cart snapshot"),
        }
    }

    /// Convert an operation failure into its user-facing notification.
    ///
    /// Out-of-stock keeps its distinct message; every other failure
    /// collapses to the per-operation generic one.
    fn report(&self, err: &CartError, generic: &str) {
        debug!(error = %err, "cart operation aborted");
        let message = match err {
            CartError::OutOfStock => messages::OUT_OF_STOCK,
            CartError::Lookup(_) | CartError::EntryNotFound(_) => generic,
        };
        self.notifier.error(message);
    }
}

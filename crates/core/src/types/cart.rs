//! The cart and its entries.
//!
//! A [`Cart`] is an ordered sequence of [`CartEntry`] values with at most
//! one entry per product. It serializes transparently as a JSON array of
//! entries, which is also the persisted snapshot format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// A single product line in the cart.
///
/// Display fields (`title`, `price`, `image_url`) are denormalized from the
/// catalog at add time and never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product this line refers to. Unique within a cart.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Display title captured at add time.
    pub title: String,
    /// Unit price captured at add time.
    pub price: Decimal,
    /// Image URL captured at add time.
    #[serde(rename = "image")]
    pub image_url: String,
    /// Quantity in the cart. Always >= 1; an entry at 0 is removed instead.
    pub amount: i64,
}

impl CartEntry {
    /// Build an entry from catalog metadata with the given quantity.
    #[must_use]
    pub fn from_product(product: Product, amount: i64) -> Self {
        Self {
            product_id: product.id,
            title: product.title,
            price: product.price,
            image_url: product.image_url,
            amount,
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

/// The user's current selection of products and quantities.
///
/// Invariants:
/// - at most one entry per [`ProductId`]
/// - every entry has `amount >= 1`
/// - insertion order is preserved but carries no meaning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the entry for a product, if present.
    #[must_use]
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Quantity currently in the cart for a product (0 if absent).
    #[must_use]
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.entry(product_id).map_or(0, |e| e.amount)
    }

    /// Set the quantity of an existing entry in place.
    ///
    /// Returns `false` if no entry for the product exists.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> bool {
        match self.entries.iter_mut().find(|e| e.product_id == product_id) {
            Some(entry) => {
                entry.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Append a new entry. The caller guarantees the product is not
    /// already present.
    pub fn push(&mut self, entry: CartEntry) {
        debug_assert!(self.entry(entry.product_id).is_none());
        self.entries.push(entry);
    }

    /// Remove the entry for a product, preserving the relative order of
    /// the remaining entries.
    ///
    /// Returns `false` if no entry for the product exists.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        match self.entries.iter().position(|e| e.product_id == product_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total quantity across all entries.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Cart total: sum of line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, amount: i64, price: Decimal) -> CartEntry {
        CartEntry {
            product_id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            amount,
        }
    }

    #[test]
    fn test_amount_of_absent_product_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.amount_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::new();
        cart.push(entry(1, 1, Decimal::new(1000, 2)));
        cart.push(entry(2, 2, Decimal::new(2000, 2)));
        cart.push(entry(3, 3, Decimal::new(3000, 2)));

        assert!(cart.remove(ProductId::new(2)));

        let ids: Vec<i64> = cart
            .entries()
            .iter()
            .map(|e| e.product_id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_product_returns_false() {
        let mut cart = Cart::new();
        cart.push(entry(1, 1, Decimal::ONE));
        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.push(entry(1, 2, Decimal::new(1050, 2))); // 2 x 10.50
        cart.push(entry(2, 1, Decimal::new(500, 2))); // 1 x 5.00

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Decimal::new(2600, 2));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.push(entry(1, 1, Decimal::new(999, 2)));

        let json = serde_json::to_string(&cart).expect("serialize cart");
        assert!(json.starts_with('['));

        let back: Cart = serde_json::from_str(&json).expect("deserialize cart");
        assert_eq!(back, cart);
    }
}

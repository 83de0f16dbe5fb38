//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use id::ProductId;
pub use product::{Product, StockInfo};

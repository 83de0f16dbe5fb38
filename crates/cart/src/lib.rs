//! Cartwheel cart state manager.
//!
//! This crate owns the client-side shopping cart: an in-memory [`Cart`]
//! validated against live inventory on every quantity change and persisted
//! to a local key-value store after every committed mutation.
//!
//! # Architecture
//!
//! [`CartStore`] is the single writer. Its collaborators are injected as
//! trait objects so ownership and mutation rights stay explicit:
//!
//! - [`api::Inventory`] / [`api::Catalog`] - remote stock and product
//!   lookups ([`api::ApiClient`] is the HTTP implementation)
//! - [`storage::KeyValueStore`] - string key-value persistence
//!   ([`storage::FileStore`] is the on-disk implementation)
//! - [`notify::Notifier`] - fire-and-forget user-facing error messages
//!
//! Every public cart operation absorbs its failures into a notification;
//! none of them return errors to the caller.
//!
//! [`Cart`]: cartwheel_core::Cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use store::CartStore;

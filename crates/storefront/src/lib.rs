//! Maison Bonheur Storefront library.
//!
//! Client-side state of the perfume shop: the cart, wishlist, placed orders,
//! customer accounts and saved creations, each persisted as a JSON list under
//! its own storage key and observable through a watch channel.
//!
//! # Modules
//!
//! - [`storage`] - Key/value backends (file and memory) and fail-soft loading
//! - [`stores`] - Cart, wishlist, order and creation stores
//! - [`services`] - Accounts, checkout and the perfume creator
//! - [`catalog`] - Catalog query building and in-memory filtering
//! - [`state`] - [`Storefront`], the composition root

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;

pub use error::{AppError, Result};
pub use state::Storefront;

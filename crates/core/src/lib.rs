//! Maison Bonheur Core - Shared types library.
//!
//! This crate provides common types used across all Maison Bonheur components:
//! - `storefront` - Cart, wishlist, order and account stores
//! - `cli` - Command-line driver for the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no storage, no notification channels.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

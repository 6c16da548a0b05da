//! Subcommand implementations, one module per store or service.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod creator;
pub mod orders;
pub mod wishlist;

//! Operations that span stores or sit in front of them.
//!
//! - [`auth`] - Customer accounts and the login session
//! - [`checkout`] - Shipping, totals and placing an order from the cart
//! - [`creator`] - Composing custom perfumes from a note palette

pub mod auth;
pub mod checkout;
pub mod creator;

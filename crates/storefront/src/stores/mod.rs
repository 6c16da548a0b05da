//! Persisted client-side stores.
//!
//! Each store owns one list, loads it from [`Storage`](crate::storage::Storage)
//! when constructed, rewrites the whole list after every mutation, and
//! publishes the new list to subscribers. Stores are independent: nothing
//! here coordinates writes across two stores.

mod cart;
mod creations;
mod orders;
pub(crate) mod persisted;
mod wishlist;

pub use cart::CartStore;
pub use creations::CreationStore;
pub use orders::{DEFAULT_COUNTRY, OrderIdSource, OrderStore};
pub use persisted::Subscription;
pub use wishlist::WishlistStore;

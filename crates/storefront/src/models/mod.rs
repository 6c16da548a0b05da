//! Domain models persisted by the storefront stores.
//!
//! Field names follow the storage format the browser storefront wrote, so
//! lists saved by either side can be read back by the other. Accounts are
//! the exception: [`UserAccount`] keeps an argon2 `passwordHash` where the
//! browser kept a plaintext `password`, so a browser-written user list
//! does not load.

pub mod cart;
pub mod catalog;
pub mod creation;
pub mod order;
pub mod user;
pub mod wishlist;

pub use cart::{BlendDetails, CartItem};
pub use catalog::{Category, Perfume, Review};
pub use creation::{CREATION_IMAGE, Creation, Mood, Note, NoteFamily, Season};
pub use order::{Order, OrderDraft, OrderItem, ShippingAddress};
pub use user::{NewAccount, ProfileUpdate, UserAccount, UserProfile};
pub use wishlist::WishlistItem;

//! Application state: every store over one shared storage backend.

use std::sync::Arc;

use maison_bonheur_core::{OrderId, ShippingMethod};
use tracing::info;

use crate::config::{StorageBackend, StorefrontConfig};
use crate::models::{Creation, Order, ShippingAddress};
use crate::services::auth::AccountStore;
use crate::services::checkout::{self, CheckoutError, CheckoutRequest, CheckoutSummary};
use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};
use crate::stores::{CartStore, CreationStore, OrderStore, WishlistStore};

/// The storefront's stores, constructed once and passed by reference.
pub struct Storefront {
    storage: Arc<dyn Storage>,
    default_country: String,
    cart: CartStore,
    wishlist: WishlistStore,
    orders: OrderStore,
    accounts: AccountStore,
    creations: CreationStore,
}

impl Storefront {
    /// Open the storage backend named in `config` and load every store.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &StorefrontConfig) -> Result<Self, StorageError> {
        let storage: Arc<dyn Storage> = match config.storage {
            StorageBackend::File => Arc::new(FileStorage::open(config.data_dir.clone())?),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        };
        info!(backend = ?config.storage, data_dir = %config.data_dir.display(), "Storage opened");
        Ok(Self::with_storage(storage, &config.default_country))
    }

    /// Load every store from an existing backend.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>, default_country: &str) -> Self {
        Self {
            cart: CartStore::load(Arc::clone(&storage)),
            wishlist: WishlistStore::load(Arc::clone(&storage)),
            orders: OrderStore::load(Arc::clone(&storage)).with_default_country(default_country),
            accounts: AccountStore::load(Arc::clone(&storage)),
            creations: CreationStore::load(Arc::clone(&storage)),
            default_country: default_country.to_owned(),
            storage,
        }
    }

    /// Replace the order id generator.
    #[must_use]
    pub fn with_order_id_source(self, source: impl FnMut() -> OrderId + Send + 'static) -> Self {
        Self {
            orders: self.orders.with_id_source(source),
            ..self
        }
    }

    /// Get the storage backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderStore {
        &self.orders
    }

    pub const fn orders_mut(&mut self) -> &mut OrderStore {
        &mut self.orders
    }

    #[must_use]
    pub const fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub const fn accounts_mut(&mut self) -> &mut AccountStore {
        &mut self.accounts
    }

    #[must_use]
    pub const fn creations(&self) -> &CreationStore {
        &self.creations
    }

    /// Checkout amounts for the current cart.
    #[must_use]
    pub fn checkout_summary(&self, shipping: ShippingMethod) -> CheckoutSummary {
        checkout::summarize(&self.cart, shipping)
    }

    /// Shipping address pre-filled from the session.
    #[must_use]
    pub fn prefill_address(&self) -> ShippingAddress {
        checkout::prefill_address(&self.accounts, &self.default_country)
    }

    /// Place an order for the cart and empty it.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    pub fn checkout(&mut self, request: CheckoutRequest) -> Result<Order, CheckoutError> {
        checkout::place_order(&mut self.cart, &mut self.orders, request)
    }

    /// Save a creation and put one unit of it in the cart.
    pub fn add_creation_to_cart(&mut self, creation: Creation) {
        self.cart.add_item(creation.to_cart_item());
        self.creations.save(creation);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::services::creator::{Composer, note_palette};

    fn storefront() -> Storefront {
        Storefront::with_storage(Arc::new(MemoryStorage::new()), "Tunisie")
    }

    #[test]
    fn test_creation_goes_to_cart_and_is_saved() {
        let mut shop = storefront();
        let mut composer = Composer::new();
        for note in note_palette().iter().take(2) {
            composer.toggle(note);
        }
        let creation = composer
            .compose(Utc::now(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        let price = creation.price;

        shop.add_creation_to_cart(creation);

        assert_eq!(shop.creations().count(), 1);
        assert_eq!(shop.cart().total_item_count(), 1);
        assert_eq!(shop.cart().total_price(), price);
    }

    #[test]
    fn test_prefill_uses_default_country() {
        let shop = Storefront::with_storage(Arc::new(MemoryStorage::new()), "Maroc");
        assert_eq!(shop.prefill_address().country, "Maroc");
    }

    #[test]
    fn test_stores_share_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let mut shop = Storefront::with_storage(storage.clone(), "Tunisie");
        shop.cart_mut().add_item(crate::models::CartItem::new(
            "p1",
            "Rose",
            maison_bonheur_core::Price::from_units(40),
            "rose.jpg",
            1,
        ));
        assert_eq!(storage.len(), 1);
    }
}

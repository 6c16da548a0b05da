//! Shopping cart store.

use std::sync::Arc;

use tracing::{debug, instrument};

use maison_bonheur_core::{Price, ProductId};

use super::persisted::{PersistedList, Subscription};
use crate::models::CartItem;
use crate::storage::{Storage, keys};

/// The shopper's cart, persisted under [`keys::CART`].
pub struct CartStore {
    list: PersistedList<CartItem>,
}

impl CartStore {
    /// Load the cart from storage. Bad persisted data yields an empty cart.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            list: PersistedList::load(storage, keys::CART),
        }
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.list.items()
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items().iter().find(|item| &item.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Subscribe to cart snapshots.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<CartItem> {
        self.list.subscribe()
    }

    /// Add a line, merging into an existing line with the same id.
    ///
    /// Merging adds the incoming quantity to the existing one; the existing
    /// name, price and image are kept.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub fn add_item(&mut self, item: CartItem) {
        let items = self.list.items_mut();
        if let Some(existing) = items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(quantity = existing.quantity, "Merged into existing cart line");
        } else {
            items.push(item);
            debug!("Appended cart line");
        }
        self.list.commit();
    }

    /// Remove the line with `id`. Missing ids are ignored.
    #[instrument(skip(self), fields(id = %id))]
    pub fn remove_item(&mut self, id: &ProductId) {
        self.list.items_mut().retain(|item| &item.id != id);
        self.list.commit();
    }

    /// Overwrite the quantity of the line with `id`.
    ///
    /// Missing ids are ignored. The value is stored as given, including 0;
    /// keeping quantities at or above 1 is up to the caller.
    #[instrument(skip(self), fields(id = %id))]
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        let Some(item) = self.list.items_mut().iter_mut().find(|item| &item.id == id) else {
            debug!("No cart line to update");
            return;
        };
        item.quantity = quantity;
        self.list.commit();
    }

    /// Remove every line.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.list.items_mut().clear();
        self.list.commit();
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items().iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.items()
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity))
    }
}

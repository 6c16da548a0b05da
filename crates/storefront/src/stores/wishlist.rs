//! Wishlist store.

use std::sync::Arc;

use tracing::{debug, instrument};

use maison_bonheur_core::PerfumeId;

use super::persisted::{PersistedList, Subscription};
use crate::models::WishlistItem;
use crate::storage::{Storage, keys};

/// Deduplicated favorites, persisted under [`keys::WISHLIST`].
pub struct WishlistStore {
    list: PersistedList<WishlistItem>,
}

impl WishlistStore {
    /// Load the wishlist from storage. Bad persisted data yields an empty list.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            list: PersistedList::load(storage, keys::WISHLIST),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        self.list.items()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<WishlistItem> {
        self.list.subscribe()
    }

    /// Whether a perfume is in the wishlist.
    #[must_use]
    pub fn has(&self, id: PerfumeId) -> bool {
        self.items().iter().any(|item| item.id == id)
    }

    /// Add an entry unless one with the same id is already present.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add(&mut self, item: WishlistItem) {
        if self.has(item.id) {
            debug!("Already in wishlist");
            return;
        }
        self.list.items_mut().push(item);
        self.list.commit();
    }

    /// Remove the entry with `id`. Missing ids are ignored.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: PerfumeId) {
        self.list.items_mut().retain(|item| item.id != id);
        self.list.commit();
    }

    /// Add when absent, remove when present. Returns whether the perfume is
    /// now in the wishlist.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.has(item.id) {
            self.remove(item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.list.items_mut().clear();
        self.list.commit();
    }
}

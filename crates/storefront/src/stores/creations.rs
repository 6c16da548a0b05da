//! Saved custom perfume creations.

use std::sync::Arc;

use tracing::{info, instrument};

use super::persisted::{PersistedList, Subscription};
use crate::models::Creation;
use crate::storage::{Storage, keys};

/// Creations saved from the perfume creator, persisted under
/// [`keys::CREATIONS`].
pub struct CreationStore {
    list: PersistedList<Creation>,
}

impl CreationStore {
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            list: PersistedList::load(storage, keys::CREATIONS),
        }
    }

    #[instrument(skip(self, creation), fields(id = %creation.id))]
    pub fn save(&mut self, creation: Creation) {
        info!(name = %creation.name, price = %creation.price, "Creation saved");
        self.list.items_mut().push(creation);
        self.list.commit();
    }

    #[must_use]
    pub fn items(&self) -> &[Creation] {
        self.list.items()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<Creation> {
        self.list.subscribe()
    }
}

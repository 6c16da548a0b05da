//! A list persisted under one storage key with change notification.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::storage::{self, Loaded, Storage};

/// Receiver for a store's list snapshots.
///
/// The receiver always holds the latest list; `changed()` resolves after each
/// mutation and `borrow()` reads the current snapshot without waiting.
pub type Subscription<T> = watch::Receiver<Vec<T>>;

/// In-memory list mirrored to storage.
///
/// Every [`commit`](Self::commit) rewrites the whole list and publishes a
/// fresh copy, so subscribers never observe a list being edited in place.
pub(crate) struct PersistedList<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    items: Vec<T>,
    tx: watch::Sender<Vec<T>>,
}

impl<T> PersistedList<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Load the list stored under `key`.
    ///
    /// Missing, malformed, or unreadable data yields an empty list.
    pub(crate) fn load(storage: Arc<dyn Storage>, key: &'static str) -> Self {
        let loaded: Loaded<Vec<T>> = storage::load(storage.as_ref(), key);
        match &loaded {
            Loaded::Malformed(e) => {
                warn!(key, error = %e, "Discarding malformed persisted list");
            }
            Loaded::Unreadable(e) => {
                warn!(key, error = %e, "Could not read persisted list");
            }
            Loaded::Missing | Loaded::Parsed(_) => {}
        }

        let items = loaded.into_value();
        debug!(key, count = items.len(), "Loaded persisted list");

        let (tx, _) = watch::channel(items.clone());
        Self {
            key,
            storage,
            items,
            tx,
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub(crate) fn subscribe(&self) -> Subscription<T> {
        self.tx.subscribe()
    }

    /// Persist the full list and publish a snapshot.
    ///
    /// A failed write is logged; the in-memory list stays authoritative.
    pub(crate) fn commit(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => {
                if let Err(e) = self.storage.write(self.key, &json) {
                    warn!(key = self.key, error = %e, "Failed to persist list");
                }
            }
            Err(e) => warn!(key = self.key, error = %e, "Failed to serialize list"),
        }
        self.publish();
    }

    /// Publish a snapshot without writing to storage.
    pub(crate) fn publish(&self) {
        self.tx.send_replace(self.items.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_commit_writes_and_publishes() {
        let storage = MemoryStorage::new();
        let mut list: PersistedList<u32> = PersistedList::load(Arc::new(storage.clone()), "nums");
        let mut rx = list.subscribe();
        assert!(rx.borrow().is_empty());

        list.items_mut().push(7);
        list.commit();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![7]);
        assert_eq!(storage.read("nums").unwrap().as_deref(), Some("[7]"));
    }

    #[test]
    fn test_malformed_loads_empty_without_rewriting() {
        let storage = MemoryStorage::new();
        storage.write("nums", "{{{").unwrap();
        let list: PersistedList<u32> = PersistedList::load(Arc::new(storage.clone()), "nums");
        assert!(list.items().is_empty());
        assert_eq!(storage.read("nums").unwrap().as_deref(), Some("{{{"));
    }

    #[test]
    fn test_subscriber_sees_loaded_list() {
        let storage = MemoryStorage::new();
        storage.write("nums", "[1,2]").unwrap();
        let list: PersistedList<u32> = PersistedList::load(Arc::new(storage), "nums");
        assert_eq!(*list.subscribe().borrow(), vec![1, 2]);
    }
}

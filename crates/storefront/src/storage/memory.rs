//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Storage, StorageError, validate_key};

/// Process-local storage backed by a `HashMap`.
///
/// Clones share the same map, which lets a test seed data, open a store on a
/// clone, and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.inner
            .write()
            .map_err(|_| StorageError::Poisoned)?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.inner
            .write()
            .map_err(|_| StorageError::Poisoned)?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.write("cart_items", "[]").unwrap();
        assert_eq!(storage.read("cart_items").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.remove("cart_items").unwrap();
        assert_eq!(storage.read("cart_items").unwrap(), None);
        storage.remove("cart_items").unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_rejects_invalid_key() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.write("a/b", "v"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}

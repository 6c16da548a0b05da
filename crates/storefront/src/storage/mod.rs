//! String-keyed persistent storage.
//!
//! The stores persist their whole list as one JSON value per key, the way the
//! browser storefront used `localStorage`. Backends only move strings around;
//! (de)serialization lives in [`parse_or_default`] and the stores.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, used by tests and `MB_STORAGE=memory`
//! - [`FileStorage`] - one `<key>.json` file per key under a data directory

mod file;
mod memory;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys used by the stores.
pub mod keys {
    /// Cart line items.
    pub const CART: &str = "cart_items";

    /// Wishlist entries.
    pub const WISHLIST: &str = "user_wishlist";

    /// Placed orders, oldest first.
    pub const ORDERS: &str = "user_orders";

    /// Registered customer accounts.
    pub const USERS: &str = "mb_users";

    /// Profile of the logged-in customer.
    pub const SESSION: &str = "mb_user_session";

    /// Custom perfume creations.
    pub const CREATIONS: &str = "perfumeCreations";
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters that cannot be mapped to a file name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A writer panicked while holding the storage lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string-keyed store of string values.
///
/// Implementations are shared between stores behind an `Arc`, so every method
/// takes `&self`.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Outcome of loading a persisted value.
///
/// Malformed data is an expected outcome, not an error: callers fall back to
/// a default and keep going.
#[derive(Debug)]
pub enum Loaded<T> {
    /// Nothing was stored under the key.
    Missing,
    /// The stored value parsed successfully.
    Parsed(T),
    /// The stored value could not be parsed.
    Malformed(serde_json::Error),
    /// The backend could not be read.
    Unreadable(StorageError),
}

impl<T> Loaded<T> {
    /// Whether loading fell back because of bad data or a failed read.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Unreadable(_))
    }
}

impl<T: Default> Loaded<T> {
    /// The parsed value, or `T::default()` for every other outcome.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Parsed(value) => value,
            Self::Missing | Self::Malformed(_) | Self::Unreadable(_) => T::default(),
        }
    }
}

/// Parse a raw stored value without ever failing the caller.
#[must_use]
pub fn parse_or_default<T: DeserializeOwned>(raw: Option<&str>) -> Loaded<T> {
    match raw {
        None => Loaded::Missing,
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => Loaded::Parsed(value),
            Err(e) => Loaded::Malformed(e),
        },
    }
}

/// Read and parse the value stored under `key`.
pub fn load<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Loaded<T> {
    match storage.read(key) {
        Ok(raw) => parse_or_default(raw.as_deref()),
        Err(e) => Loaded::Unreadable(e),
    }
}

/// Check that a key only uses characters safe for every backend.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing() {
        let loaded: Loaded<Vec<u32>> = parse_or_default(None);
        assert!(matches!(loaded, Loaded::Missing));
        assert!(!loaded.is_failure());
    }

    #[test]
    fn test_parse_malformed_falls_back() {
        let loaded: Loaded<Vec<u32>> = parse_or_default(Some("not json"));
        assert!(loaded.is_failure());
        assert!(loaded.into_value().is_empty());
    }

    #[test]
    fn test_parse_wrong_shape_falls_back() {
        let loaded: Loaded<Vec<u32>> = parse_or_default(Some("{\"a\":1}"));
        assert!(matches!(loaded, Loaded::Malformed(_)));
    }

    #[test]
    fn test_parse_ok() {
        let loaded: Loaded<Vec<u32>> = parse_or_default(Some("[1,2,3]"));
        assert_eq!(loaded.into_value(), vec![1, 2, 3]);
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key(keys::CART).is_ok());
        assert!(validate_key(keys::CREATIONS).is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_load_from_storage() {
        let storage = MemoryStorage::new();
        storage.write("numbers", "[4,5]").unwrap();
        let loaded: Loaded<Vec<u32>> = load(&storage, "numbers");
        assert_eq!(loaded.into_value(), vec![4, 5]);
        let missing: Loaded<Vec<u32>> = load(&storage, "other");
        assert!(matches!(missing, Loaded::Missing));
    }
}

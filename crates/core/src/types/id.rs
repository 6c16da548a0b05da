//! Newtype IDs for type-safe entity references.
//!
//! Catalog records use numeric IDs (`define_id!`), while cart lines and orders
//! are keyed by strings (`define_key!`). Keeping them as distinct types
//! prevents, for example, looking up an order with a product key.

use core::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Macro to define a numeric ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use maison_bonheur_core::define_id;
/// define_id!(BrandId);
/// define_id!(ShelfId);
///
/// let brand = BrandId::new(1);
/// let shelf = ShelfId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: BrandId = shelf;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Macro to define a string key wrapper.
///
/// Same shape as [`define_id!`] but wraps a `String`, for entities whose
/// identifiers are opaque text.
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the key and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog entities (served by the JSON catalog API)
define_id!(PerfumeId);
define_id!(CategoryId);
define_id!(ReviewId);
define_id!(UserId);

// Cart lines: a catalog perfume id rendered as text, or a custom creation id
define_key!(ProductId);

impl From<PerfumeId> for ProductId {
    fn from(id: PerfumeId) -> Self {
        Self(id.to_string())
    }
}

/// Order identifier of the form `CMD-<unix millis>-<NNN>`.
///
/// Identifiers are not checked for uniqueness against existing orders; the
/// millisecond timestamp plus a three digit random suffix keeps collisions
/// negligible for a single shopper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Prefix shared by every generated order id.
    pub const PREFIX: &'static str = "CMD";

    /// Build an id from a timestamp and a suffix (taken modulo 1000).
    #[must_use]
    pub fn from_parts(created_at: DateTime<Utc>, suffix: u16) -> Self {
        Self(format!(
            "{}-{}-{:03}",
            Self::PREFIX,
            created_at.timestamp_millis(),
            suffix % 1000
        ))
    }

    /// Generate a fresh id from the current time and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let suffix = rand::rng().random_range(0..1000);
        Self::from_parts(Utc::now(), suffix)
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_order_id_from_parts_pads_suffix() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let id = OrderId::from_parts(at, 7);
        assert_eq!(id.as_str(), "CMD-1700000000123-007");
    }

    #[test]
    fn test_order_id_suffix_wraps() {
        let at = Utc.timestamp_millis_opt(1).unwrap();
        assert_eq!(OrderId::from_parts(at, 1042).as_str(), "CMD-1-042");
    }

    #[test]
    fn test_generated_order_id_shape() {
        let id = OrderId::generate();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.first().copied(), Some("CMD"));
        assert!(parts.get(1).unwrap().parse::<i64>().is_ok());
        assert_eq!(parts.get(2).unwrap().len(), 3);
    }

    #[test]
    fn test_product_id_from_perfume_id() {
        let id = ProductId::from(PerfumeId::new(42));
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let json = serde_json::to_string(&PerfumeId::new(5)).unwrap();
        assert_eq!(json, "5");
        let key = serde_json::to_string(&ProductId::new("p1")).unwrap();
        assert_eq!(key, "\"p1\"");
    }
}

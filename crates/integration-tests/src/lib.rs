//! Integration tests for Maison Bonheur.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maison-bonheur-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart, account and order stores working together
//! - `file_persistence` - State surviving a reopen of the data directory

use std::path::Path;

use maison_bonheur_core::OrderId;
use maison_bonheur_storefront::Storefront;
use maison_bonheur_storefront::config::StorefrontConfig;
use tempfile::TempDir;

/// A storefront backed by files in a temporary data directory.
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration pointing the file backend at the data directory.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is rejected.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        let data_dir = self.data_dir().display().to_string();
        StorefrontConfig::from_lookup(|key| match key {
            "MB_DATA_DIR" => Some(data_dir.clone()),
            "MB_STORAGE" => Some("file".to_string()),
            _ => None,
        })
        .expect("Failed to build test config")
    }

    /// Open the storefront with deterministic order ids.
    ///
    /// Each call starts the id sequence at `first_id`, so reopened storefronts
    /// should pass a value past the ids already used.
    ///
    /// # Panics
    ///
    /// Panics if the data directory cannot be opened.
    #[must_use]
    pub fn open(&self, first_id: u32) -> Storefront {
        let mut next = first_id;
        Storefront::open(&self.config())
            .expect("Failed to open storefront")
            .with_order_id_source(move || {
                let id = OrderId::from(format!("CMD-TEST-{next:04}"));
                next += 1;
                id
            })
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

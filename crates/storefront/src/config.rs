//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MB_DATA_DIR` - Directory for file-backed storage (default: .maison-bonheur)
//! - `MB_STORAGE` - Storage backend, `file` or `memory` (default: file)
//! - `MB_DEFAULT_COUNTRY` - Country of the default shipping address (default: Tunisie)
//! - `MB_CATALOG_URL` - Base URL of the JSON catalog API (default: <http://localhost:3000>)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::stores::DEFAULT_COUNTRY;

const DEFAULT_DATA_DIR: &str = ".maison-bonheur";
const DEFAULT_CATALOG_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the stores keep their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per key under the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `file` or `memory`, got `{other}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Storage backend
    pub storage: StorageBackend,
    /// Country used when an order has no shipping address
    pub default_country: String,
    /// Base URL of the catalog API
    pub catalog_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, "MB_DATA_DIR", DEFAULT_DATA_DIR));
        let storage = get_env_or_default(&lookup, "MB_STORAGE", "file")
            .parse::<StorageBackend>()
            .map_err(|e| ConfigError::InvalidEnvVar("MB_STORAGE".to_string(), e))?;
        let default_country =
            get_env_or_default(&lookup, "MB_DEFAULT_COUNTRY", DEFAULT_COUNTRY);
        if default_country.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MB_DEFAULT_COUNTRY".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let catalog_url = get_env_or_default(&lookup, "MB_CATALOG_URL", DEFAULT_CATALOG_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("MB_CATALOG_URL".to_string(), e.to_string()))?;

        Ok(Self {
            data_dir,
            storage,
            default_country,
            catalog_url,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".maison-bonheur"));
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.default_country, "Tunisie");
        assert_eq!(config.catalog_url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("MB_DATA_DIR", "/var/lib/mb"),
            ("MB_STORAGE", "Memory"),
            ("MB_DEFAULT_COUNTRY", "France"),
            ("MB_CATALOG_URL", "https://api.maisonbonheur.tn"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/mb"));
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.default_country, "France");
        assert_eq!(config.catalog_url.host_str(), Some("api.maisonbonheur.tn"));
    }

    #[test]
    fn test_invalid_storage_backend() {
        let err = StorefrontConfig::from_lookup(lookup(&[("MB_STORAGE", "redis")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "MB_STORAGE"));
    }

    #[test]
    fn test_invalid_catalog_url() {
        let err =
            StorefrontConfig::from_lookup(lookup(&[("MB_CATALOG_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "MB_CATALOG_URL"));
    }

    #[test]
    fn test_blank_country_rejected() {
        let err =
            StorefrontConfig::from_lookup(lookup(&[("MB_DEFAULT_COUNTRY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(..)));
    }
}

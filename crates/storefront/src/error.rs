//! Unified error handling.
//!
//! Provides a unified `AppError` type wrapping every refusable storefront
//! operation. Store persistence failures are logged rather than returned, so
//! they never appear here.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::services::creator::CreatorError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Account operation refused.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Creator refused to compose.
    #[error("Creator error: {0}")]
    Creator(#[from] CreatorError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, AppError>;

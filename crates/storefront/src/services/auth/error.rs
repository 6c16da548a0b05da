//! Account error types.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] maison_bonheur_core::EmailError),

    /// A required registration or profile field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Another account already uses this email.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// The operation needs a logged-in customer.
    #[error("no customer is logged in")]
    NotLoggedIn,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

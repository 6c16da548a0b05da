//! Customer accounts and the login session.
//!
//! Accounts are kept in a persisted list keyed by email; the session holds the
//! public profile of the logged-in customer under its own storage key.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use maison_bonheur_core::Email;

use crate::models::{NewAccount, ProfileUpdate, UserAccount, UserProfile};
use crate::storage::{self, Loaded, Storage, keys};
use crate::stores::Subscription;
use crate::stores::persisted::PersistedList;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Registered accounts plus the current session.
pub struct AccountStore {
    storage: Arc<dyn Storage>,
    users: PersistedList<UserAccount>,
    session: watch::Sender<Option<UserProfile>>,
}

impl AccountStore {
    /// Load accounts and the session from storage.
    ///
    /// A malformed accounts list loads as empty; a malformed session is
    /// removed from storage.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let users = PersistedList::load(Arc::clone(&storage), keys::USERS);

        let current = match storage::load::<UserProfile>(storage.as_ref(), keys::SESSION) {
            Loaded::Parsed(profile) => Some(profile),
            Loaded::Missing => None,
            Loaded::Malformed(e) => {
                warn!(error = %e, "Discarding malformed session");
                if let Err(e) = storage.remove(keys::SESSION) {
                    warn!(error = %e, "Failed to remove malformed session");
                }
                None
            }
            Loaded::Unreadable(e) => {
                warn!(error = %e, "Could not read session");
                None
            }
        };

        let (session, _) = watch::channel(current);
        Self {
            storage,
            users,
            session,
        }
    }

    /// The logged-in customer, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Subscribe to session changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.session.subscribe()
    }

    /// Subscribe to the accounts list.
    #[must_use]
    pub fn subscribe_accounts(&self) -> Subscription<UserAccount> {
        self.users.subscribe()
    }

    #[must_use]
    pub fn account_count(&self) -> usize {
        self.users.items().len()
    }

    // =========================================================================
    // Registration & Login
    // =========================================================================

    /// Register a new account. Does not log the customer in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if a name or the address is blank.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    #[instrument(skip(self, account), fields(email = %account.email))]
    pub fn register(&mut self, account: NewAccount) -> Result<UserProfile, AuthError> {
        require("first name", &account.first_name)?;
        require("last name", &account.last_name)?;
        require("address", &account.address)?;
        let email = Email::parse(&account.email)?;
        validate_password(account.password.expose_secret())?;

        if self.find(&email).is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(account.password.expose_secret())?;
        let user = UserAccount {
            first_name: account.first_name.trim().to_owned(),
            last_name: account.last_name.trim().to_owned(),
            email,
            address: account.address.trim().to_owned(),
            phone: account.phone,
            password_hash,
        };
        let profile = user.profile();

        self.users.items_mut().push(user);
        self.users.commit();

        info!("Account registered");
        Ok(profile)
    }

    /// Log in with email and password and start a session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email)?;
        let user = self.find(&email).ok_or(AuthError::InvalidCredentials)?;
        verify_password(password.expose_secret(), &user.password_hash)?;

        let profile = user.profile();
        self.set_session(Some(profile.clone()));

        info!("Customer logged in");
        Ok(profile)
    }

    /// End the session. Logging out without a session is a no-op.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.set_session(None);
    }

    /// Update the logged-in customer's profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` without a session.
    /// Returns `AuthError::UserAlreadyExists` if another account uses the new email.
    #[instrument(skip(self, update))]
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        let current = self.current_user().ok_or(AuthError::NotLoggedIn)?;
        require("first name", &update.first_name)?;
        require("last name", &update.last_name)?;
        require("address", &update.address)?;
        let email = Email::parse(&update.email)?;

        if email != current.email && self.find(&email).is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let Some(user) = self
            .users
            .items_mut()
            .iter_mut()
            .find(|user| user.email == current.email)
        else {
            // The session outlived its account (e.g. the accounts list was reset).
            return Err(AuthError::NotLoggedIn);
        };

        user.first_name = update.first_name.trim().to_owned();
        user.last_name = update.last_name.trim().to_owned();
        user.email = email;
        user.address = update.address.trim().to_owned();
        user.phone = update.phone;
        let profile = user.profile();

        self.users.commit();
        self.set_session(Some(profile.clone()));

        info!("Profile updated");
        Ok(profile)
    }

    fn find(&self, email: &Email) -> Option<&UserAccount> {
        self.users.items().iter().find(|user| &user.email == email)
    }

    fn set_session(&self, profile: Option<UserProfile>) {
        let result = match &profile {
            Some(profile) => match serde_json::to_string(profile) {
                Ok(json) => self.storage.write(keys::SESSION, &json),
                Err(e) => {
                    warn!(error = %e, "Failed to serialize session");
                    Ok(())
                }
            },
            None => self.storage.remove(keys::SESSION),
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist session");
        }
        self.session.send_replace(profile);
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

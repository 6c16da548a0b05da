//! Customer account types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use maison_bonheur_core::Email;

/// A registered customer, as persisted in the accounts list.
///
/// Lists that carry a plaintext `password` instead of `passwordHash` fail
/// to parse and load as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl UserAccount {
    /// The public part of the account.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Session-stored identity of the logged-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Registration input.
#[derive(Debug)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
    pub password: SecretString,
}

/// Profile edit input. The password is left unchanged.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
}

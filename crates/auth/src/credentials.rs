use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credential check failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// A username/password pair as entered on the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Pluggable credential check.
///
/// Implementations decide what a valid pair is; the built-in
/// [`StaticCredentials`] compares against one fixed owner account. Anything
/// smarter (hashed passwords, a directory) slots in behind this trait.
pub trait CredentialVerifier: Send + Sync {
    /// Check a credential pair.
    fn verify(&self, credentials: &Credentials) -> bool;

    /// Check a credential pair, failing with [`AuthError::InvalidCredentials`].
    fn authorize(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if self.verify(credentials) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Fixed owner account used by the stock login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    /// The built-in owner account.
    fn default() -> Self {
        Self::new("ZahidCodes", "78600")
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}

//! Driving port for user registration and API key resolution.
//!
//! Inbound adapters call this port to register users and to resolve the
//! caller's identity from an API key without importing persistence types.
//! Handler tests substitute a double instead of wiring storage.

use async_trait::async_trait;

use crate::domain::{ApiKey, Error, User, UserName};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Register a new user and issue its API key.
    async fn register(&self, name: UserName) -> Result<User, Error>;

    /// Resolve an API key to the user it was issued to.
    ///
    /// `Ok(None)` means the key is well formed but unknown.
    async fn find_by_api_key(&self, api_key: &ApiKey) -> Result<Option<User>, Error>;
}

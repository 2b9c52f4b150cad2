//! Driven port for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{ApiKey, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A uniquely indexed value (the API key) was already taken.
        DuplicateKey { message: String } => "user repository rejected duplicate key: {message}",
    }
}

/// Storage collaborator for users.
///
/// Implementations own API key uniqueness; callers add no locking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user exactly as described by the creation record.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Resolve an API key to its user, if one was issued.
    async fn find_by_api_key(&self, api_key: &ApiKey)
    -> Result<Option<User>, UserPersistenceError>;
}

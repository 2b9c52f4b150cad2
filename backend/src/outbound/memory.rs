//! In-process storage for development and tests.
//!
//! [`InMemoryStore`] implements both repository ports behind one mutex so
//! API key uniqueness and feed ownership are checked atomically with the
//! insert, mirroring the unique index and foreign key of the SQL schema.
//! Nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    FeedPersistenceError, FeedRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{ApiKey, Feed, FeedId, NewFeed, NewUser, User, UserId};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    feeds: HashMap<FeedId, Feed>,
}

/// Mutex-guarded user and feed tables.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut tables = self.lock().map_err(UserPersistenceError::query)?;
        if tables.users.contains_key(&user.id) {
            return Err(UserPersistenceError::duplicate_key("user id already exists"));
        }
        if tables
            .users
            .values()
            .any(|existing| existing.api_key == user.api_key)
        {
            return Err(UserPersistenceError::duplicate_key("api key already issued"));
        }

        let stored = User::from(user.clone());
        tables.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_api_key(
        &self,
        api_key: &ApiKey,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::query)?;
        Ok(tables
            .users
            .values()
            .find(|user| user.api_key == *api_key)
            .cloned())
    }
}

#[async_trait]
impl FeedRepository for InMemoryStore {
    async fn create(&self, feed: &NewFeed) -> Result<Feed, FeedPersistenceError> {
        let mut tables = self.lock().map_err(FeedPersistenceError::query)?;
        if !tables.users.contains_key(&feed.user_id) {
            return Err(FeedPersistenceError::query(format!(
                "feed owner {} does not exist",
                feed.user_id
            )));
        }

        let stored = Feed::from(feed.clone());
        tables.feeds.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

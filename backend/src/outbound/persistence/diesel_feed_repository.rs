//! PostgreSQL-backed `FeedRepository` implementation using Diesel ORM.
//!
//! The `feeds.user_id` foreign key enforces that the owner exists; a
//! violation surfaces as a query error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FeedPersistenceError, FeedRepository};
use crate::domain::{Feed, FeedId, FeedName, FeedUrl, FeedValidationError, NewFeed, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{FeedRow, NewFeedRow};
use super::pool::DbPool;
use super::schema::feeds;

/// Diesel-backed implementation of the `FeedRepository` port.
#[derive(Clone)]
pub struct DieselFeedRepository {
    pool: DbPool,
}

impl DieselFeedRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> FeedPersistenceError {
    map_basic_diesel_error(
        error,
        FeedPersistenceError::query,
        FeedPersistenceError::connection,
    )
}

fn row_to_feed(row: FeedRow) -> Result<Feed, FeedPersistenceError> {
    let FeedRow {
        id,
        created_at,
        updated_at,
        name,
        url,
        user_id,
    } = row;
    let invalid = |err: FeedValidationError| {
        FeedPersistenceError::query(format!("stored feed {id} is invalid: {err}"))
    };

    Ok(Feed {
        id: FeedId::from_uuid(id),
        name: FeedName::new(name).map_err(invalid)?,
        url: FeedUrl::new(url).map_err(invalid)?,
        user_id: UserId::from_uuid(user_id),
        created_at,
        updated_at,
    })
}

#[async_trait]
impl FeedRepository for DieselFeedRepository {
    async fn create(&self, feed: &NewFeed) -> Result<Feed, FeedPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, FeedPersistenceError::connection))?;

        let new_row = NewFeedRow {
            id: *feed.id.as_uuid(),
            created_at: feed.created_at,
            updated_at: feed.updated_at,
            name: feed.name.as_ref(),
            url: feed.url.as_ref(),
            user_id: *feed.user_id.as_uuid(),
        };

        let stored: FeedRow = diesel::insert_into(feeds::table)
            .values(&new_row)
            .returning(FeedRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_feed(stored)
    }
}

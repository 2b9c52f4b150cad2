//! Feed registration domain service.
//!
//! Implements [`FeedRegistry`] over a [`FeedRepository`]. The owner passed in
//! is the authenticated caller; the service never reads ownership from the
//! request payload.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, warn};

use crate::domain::ports::{CreateFeedRequest, FeedPersistenceError, FeedRegistry, FeedRepository};
use crate::domain::user_accounts_service::SERVICE_UNAVAILABLE_MESSAGE;
use crate::domain::{Error, Feed, NewFeed, UserId};

const CREATE_FEED_FAILED: &str = "Couldn't create feed";

/// Feed registry service implementing the driving port.
#[derive(Clone)]
pub struct FeedRegistryService<R> {
    feeds: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> FeedRegistryService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(feeds: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { feeds, clock }
    }
}

#[async_trait]
impl<R> FeedRegistry for FeedRegistryService<R>
where
    R: FeedRepository,
{
    async fn create_feed(&self, owner: &UserId, request: CreateFeedRequest) -> Result<Feed, Error> {
        let CreateFeedRequest { name, url } = request;
        let record = NewFeed::issue(*owner, name, url, self.clock.utc());
        self.feeds.create(&record).await.map_err(|err| match err {
            FeedPersistenceError::Connection { message } => {
                warn!(error = %message, "feed repository unavailable");
                Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
            }
            FeedPersistenceError::Query { message } => {
                error!(error = %message, owner = %owner, "feed creation failed");
                Error::internal(CREATE_FEED_FAILED)
            }
        })
    }
}

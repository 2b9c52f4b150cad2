//! Driven port for feed persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Feed, NewFeed};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by feed repository adapters.
    pub enum FeedPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "feed repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "feed repository query failed: {message}",
    }
}

/// Storage collaborator for feeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Insert a feed; the owning user must already exist.
    async fn create(&self, feed: &NewFeed) -> Result<Feed, FeedPersistenceError>;
}

//! Driving port for feed registration.

use async_trait::async_trait;

use crate::domain::{Error, Feed, FeedName, FeedUrl, UserId};

/// Validated feed registration payload.
///
/// Carries no owner: ownership comes from the authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFeedRequest {
    pub name: FeedName,
    pub url: FeedUrl,
}

/// Domain use-case port for registering feeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedRegistry: Send + Sync {
    /// Register a feed owned by `owner`.
    async fn create_feed(&self, owner: &UserId, request: CreateFeedRequest)
    -> Result<Feed, Error>;
}

//! Feed data model.
//!
//! A feed is a named RSS source registered by exactly one owning user. The
//! owner is always the authenticated caller; request payloads never name it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors returned by the feed constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedValidationError {
    EmptyName,
    InvalidUrl { reason: String },
    UnsupportedScheme { scheme: String },
}

impl fmt::Display for FeedValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidUrl { reason } => write!(f, "url must be an absolute URL: {reason}"),
            Self::UnsupportedScheme { scheme } => {
                write!(f, "url scheme must be http or https, got {scheme}")
            }
        }
    }
}

impl std::error::Error for FeedValidationError {}

/// Stable feed identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeedId(Uuid);

impl FeedId {
    /// Generate a new random [`FeedId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human readable feed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedName(String);

impl FeedName {
    /// Validate and construct a [`FeedName`].
    pub fn new(name: impl Into<String>) -> Result<Self, FeedValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FeedValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for FeedName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FeedName> for String {
    fn from(value: FeedName) -> Self {
        value.0
    }
}

/// Absolute `http`/`https` location of the feed document.
///
/// The caller's spelling is preserved; only the shape is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl(String);

impl FeedUrl {
    /// Validate and construct a [`FeedUrl`].
    ///
    /// # Examples
    /// ```
    /// use rssagg::domain::FeedUrl;
    ///
    /// assert!(FeedUrl::new("https://blog.boot.dev/index.xml").is_ok());
    /// assert!(FeedUrl::new("ftp://example.com/feed").is_err());
    /// assert!(FeedUrl::new("/relative/feed.xml").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, FeedValidationError> {
        let raw = raw.into();
        let parsed = Url::parse(&raw).map_err(|err| FeedValidationError::InvalidUrl {
            reason: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(raw)),
            other => Err(FeedValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }
}

impl AsRef<str> for FeedUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FeedUrl> for String {
    fn from(value: FeedUrl) -> Self {
        value.0
    }
}

/// Registered feed as held by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub id: FeedId,
    pub name: FeedName,
    pub url: FeedUrl,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation record handed to the feed repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeed {
    pub id: FeedId,
    pub name: FeedName,
    pub url: FeedUrl,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewFeed {
    /// Build a creation record owned by `owner`, stamped at `now`.
    pub fn issue(owner: UserId, name: FeedName, url: FeedUrl, now: DateTime<Utc>) -> Self {
        Self {
            id: FeedId::random(),
            name,
            url,
            user_id: owner,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<NewFeed> for Feed {
    fn from(value: NewFeed) -> Self {
        let NewFeed {
            id,
            name,
            url,
            user_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            url,
            user_id,
            created_at,
            updated_at,
        }
    }
}

//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter and
//! the persistence adapters, plus the services that implement the driving
//! ports. Nothing in here depends on actix or diesel.
//!
//! Public surface:
//! - `User`, `UserId`, `UserName`, `NewUser`: registered accounts.
//! - `ApiKey`: opaque credential issued at registration.
//! - `Feed`, `FeedId`, `FeedName`, `FeedUrl`, `NewFeed`: registered feeds.
//! - `Error`, `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: per-request correlation identifier.
//! - `UserAccountsService`, `FeedRegistryService`: port implementations.

pub mod api_key;
pub mod error;
pub mod feed;
mod feed_registry_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_accounts_service;

pub use self::api_key::{ApiKey, ApiKeyValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feed::{Feed, FeedId, FeedName, FeedUrl, FeedValidationError, NewFeed};
pub use self::feed_registry_service::FeedRegistryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserName, UserValidationError};
pub use self::user_accounts_service::UserAccountsService;

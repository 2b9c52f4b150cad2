//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod feed_registry;
mod feed_repository;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use feed_registry::MockFeedRegistry;
pub use feed_registry::{CreateFeedRequest, FeedRegistry};
#[cfg(test)]
pub use feed_repository::MockFeedRepository;
pub use feed_repository::{FeedPersistenceError, FeedRepository};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

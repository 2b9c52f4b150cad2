//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user and feed repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map onto the port
//!   error enums; driver text is logged at debug level only.
//!
//! # Example
//!
//! ```no_run
//! use rssagg::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), rssagg::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/rssagg")).await?;
//! let users = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_feed_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_feed_repository::DieselFeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

//! Feed registry backend: users register, receive an API key, and register
//! RSS feeds under their identity.
//!
//! - [`domain`]: entities, ports, and services.
//! - [`inbound`]: the actix-web HTTP adapter.
//! - [`outbound`]: Diesel and in-memory storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

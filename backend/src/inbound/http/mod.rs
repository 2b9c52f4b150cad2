//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod credentials;
pub mod error;
pub mod feeds;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Versioned API routes with the shared JSON decode policy.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
pub fn api_scope() -> Scope {
    web::scope("/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::create_user)
        .service(users::current_user)
        .service(feeds::create_feed)
}

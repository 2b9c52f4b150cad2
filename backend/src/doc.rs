//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the HTTP endpoints, their request and response
//! bodies, the `{"error"}` envelope, and the `ApiKey` authorization scheme.
//! Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::feeds::{CreateFeedBody, FeedResponse};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};

const API_KEY_SCHEME: &str = "ApiKeyHeader";

/// Enrich the generated document with the API key security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "`ApiKey <key>` using the key issued by POST /v1/users.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "RSS feed registry API",
        description = "Register users, authenticate with API keys, and register feeds."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("ApiKeyHeader" = [])),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::current_user,
        crate::inbound::http::feeds::create_feed,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CreateUserRequest, UserResponse, CreateFeedBody, FeedResponse, ErrorBody)),
    tags(
        (name = "users", description = "User registration and identity"),
        (name = "feeds", description = "Feed registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

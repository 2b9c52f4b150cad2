//! Users API handlers.
//!
//! ```text
//! POST /v1/users {"name":"Omkar"}
//! GET  /v1/users            Authorization: ApiKey <key>
//! ```

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{ApiKeyAuth, AuthenticatedUser};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /v1/users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Omkar")]
    pub name: String,
}

/// Public representation of a user, API key included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub api_key: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: *user.id.as_uuid(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            api_key: user.api_key.as_str().to_owned(),
            name: user.name.into(),
        }
    }
}

/// Register a user and issue their API key.
#[utoipa::path(
    post,
    path = "/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let CreateUserRequest { name } = payload.into_inner();
    let name = UserName::new(name).map_err(|err| Error::invalid_request(err.to_string()))?;
    let user = state.users.register(name).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Return the caller's own user record.
#[utoipa::path(
    get,
    path = "/v1/users",
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse),
        (status = 401, description = "Missing or malformed API key", body = ErrorBody),
        (status = 404, description = "API key not assigned", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users", wrap = "ApiKeyAuth")]
pub async fn current_user(user: AuthenticatedUser) -> web::Json<UserResponse> {
    web::Json(UserResponse::from(user.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockFeedRegistry, MockUserAccounts};
    use crate::inbound::http::error::json_error_handler;
    use crate::inbound::http::test_utils::{accounts_resolving, sample_user, state_with};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn send(users: MockUserAccounts, req: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(users, MockFeedRegistry::new()))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(web::scope("/v1").service(create_user).service(current_user)),
        )
        .await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: Value = actix_test::read_body_json(res).await;
        (status, body)
    }

    #[rstest]
    #[actix_web::test]
    async fn create_user_returns_issued_record() {
        let mut users = MockUserAccounts::new();
        users
            .expect_register()
            .withf(|name| name.as_ref() == "Omkar")
            .times(1)
            .returning(|name| Ok(sample_user(name.as_ref(), "fresh-key")));

        let req = actix_test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": "Omkar" }));
        let (status, body) = send(users, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Omkar");
        assert_eq!(body["api_key"], "fresh-key");
        for field in ["id", "created_at", "updated_at"] {
            assert!(body.get(field).is_some(), "missing {field}");
        }
    }

    #[rstest]
    #[case::blank_name(json!({ "name": "   " }), "name must not be empty")]
    #[case::missing_name(json!({}), "Couldn't decode parameters")]
    #[case::wrong_type(json!({ "name": 42 }), "Couldn't decode parameters")]
    #[actix_web::test]
    async fn create_user_rejects_bad_bodies(#[case] payload: Value, #[case] message: &str) {
        let mut users = MockUserAccounts::new();
        users.expect_register().never();

        let req = actix_test::TestRequest::post().uri("/v1/users").set_json(payload);
        let (status, body) = send(users, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": message }));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_user_surfaces_domain_failures() {
        let mut users = MockUserAccounts::new();
        users
            .expect_register()
            .times(1)
            .returning(|_| Err(Error::internal("Couldn't create user")));

        let req = actix_test::TestRequest::post()
            .uri("/v1/users")
            .set_json(json!({ "name": "Omkar" }));
        let (status, body) = send(users, req).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Couldn't create user" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn current_user_returns_resolved_identity() {
        let user = sample_user("Omkar", "k-789");
        let expected_id = user.id.to_string();

        let req = actix_test::TestRequest::get()
            .uri("/v1/users")
            .insert_header(("Authorization", "ApiKey k-789"));
        let (status, body) = send(accounts_resolving(user), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], expected_id.as_str());
        assert_eq!(body["name"], "Omkar");
        assert_eq!(body["api_key"], "k-789");
    }

    #[rstest]
    #[actix_web::test]
    async fn current_user_requires_a_key() {
        let mut users = MockUserAccounts::new();
        users.expect_find_by_api_key().never();

        let (status, body) = send(users, actix_test::TestRequest::get().uri("/v1/users")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Couldn't find api key" }));
    }
}

//! Feeds API handlers.
//!
//! ```text
//! POST /v1/feeds {"name":"Boot.dev","url":"https://blog.boot.dev/index.xml"}
//!      Authorization: ApiKey <key>
//! ```

use actix_web::{post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::CreateFeedRequest;
use crate::domain::{Error, Feed, FeedName, FeedUrl, FeedValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{ApiKeyAuth, AuthenticatedUser};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /v1/feeds`.
///
/// Any owner field a client sends is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateFeedBody {
    #[schema(example = "Boot.dev Blog")]
    pub name: String,
    #[schema(example = "https://blog.boot.dev/index.xml")]
    pub url: String,
}

impl TryFrom<CreateFeedBody> for CreateFeedRequest {
    type Error = FeedValidationError;

    fn try_from(value: CreateFeedBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: FeedName::new(value.name)?,
            url: FeedUrl::new(value.url)?,
        })
    }
}

/// Public representation of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

impl From<Feed> for FeedResponse {
    fn from(feed: Feed) -> Self {
        Self {
            id: *feed.id.as_uuid(),
            created_at: feed.created_at,
            updated_at: feed.updated_at,
            name: feed.name.into(),
            url: feed.url.into(),
            user_id: *feed.user_id.as_uuid(),
        }
    }
}

/// Register a feed owned by the caller.
#[utoipa::path(
    post,
    path = "/v1/feeds",
    request_body = CreateFeedBody,
    responses(
        (status = 200, description = "Feed registered", body = FeedResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Missing or malformed API key", body = ErrorBody),
        (status = 404, description = "API key not assigned", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    ),
    tags = ["feeds"],
    operation_id = "createFeed"
)]
#[post("/feeds", wrap = "ApiKeyAuth")]
pub async fn create_feed(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateFeedBody>,
) -> ApiResult<web::Json<FeedResponse>> {
    let request = CreateFeedRequest::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let feed = state.feeds.create_feed(&user.id, request).await?;
    Ok(web::Json(FeedResponse::from(feed)))
}

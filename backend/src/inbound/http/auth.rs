//! API key authentication for HTTP routes.
//!
//! [`ApiKeyAuth`] wraps individual routes. It resolves the caller from the
//! `Authorization` header before any extractor or handler runs, so a rejected
//! request never reaches the wrapped handler. Handlers behind the gate take
//! an [`AuthenticatedUser`] argument to receive the resolved identity.
//!
//! ```text
//! Authorization: ApiKey <key>
//! ```

use std::ops::Deref;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

use crate::domain::{Error, User};
use crate::inbound::http::credentials::api_key_from_headers;
use crate::inbound::http::state::HttpState;

/// Message returned when the request carries no usable API key.
pub const MISSING_API_KEY_MESSAGE: &str = "Couldn't find api key";
/// Message returned when a well-formed key resolves to nobody.
pub const UNKNOWN_USER_MESSAGE: &str = "Couldn't get user";

/// Identity resolved from the request's API key.
///
/// Only available on routes wrapped with [`ApiKeyAuth`]; elsewhere the
/// extractor fails with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(User);

impl AuthenticatedUser {
    /// Consume the wrapper, returning the user.
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Self>()
                .cloned()
                .ok_or_else(|| Error::unauthorized(MISSING_API_KEY_MESSAGE)),
        )
    }
}

/// Route middleware requiring a valid API key.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, get};
/// use rssagg::inbound::http::auth::{ApiKeyAuth, AuthenticatedUser};
///
/// #[get("/whoami", wrap = "ApiKeyAuth")]
/// async fn whoami(user: AuthenticatedUser) -> HttpResponse {
///     HttpResponse::Ok().body(user.name.to_string())
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiKeyAuth;

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ApiKeyAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`ApiKeyAuth`].
pub struct ApiKeyAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let resolved = resolve_caller(&req).await;
            let user = match resolved {
                Ok(user) => user,
                Err(err) => return Ok(req.error_response(err).map_into_right_body()),
            };
            req.extensions_mut().insert(AuthenticatedUser(user));
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Resolve the caller with at most one lookup.
async fn resolve_caller(req: &ServiceRequest) -> Result<User, Error> {
    let api_key = api_key_from_headers(req.headers()).map_err(|err| {
        debug!(reason = %err, "rejecting request without usable api key");
        Error::unauthorized(MISSING_API_KEY_MESSAGE)
    })?;

    let Some(state) = req.app_data::<web::Data<HttpState>>() else {
        error!("HttpState missing from app data; api key gate cannot resolve users");
        return Err(Error::internal("Internal server error"));
    };
    let users = state.users.clone();

    users
        .find_by_api_key(&api_key)
        .await?
        .ok_or_else(|| Error::not_found(UNKNOWN_USER_MESSAGE))
}

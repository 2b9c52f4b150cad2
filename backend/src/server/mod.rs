//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig};

use state_builders::build_http_state;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use rssagg::Trace;
#[cfg(debug_assertions)]
use rssagg::doc::ApiDoc;
use rssagg::inbound::http::api_scope;
use rssagg::inbound::http::health::{HealthState, live, ready};
use rssagg::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the application with `Trace` wrapping every route.
fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Bind the HTTP listener and mark the process ready.
///
/// Signal handling is left to the caller, which should call [`drain`] on
/// shutdown so the probes fail before the listener closes.
///
/// Storage is chosen from `config`: Diesel repositories when a pool is
/// present, a process-local store otherwise. The returned [`Server`] must be
/// awaited to serve requests.
///
/// # Errors
/// Returns [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config, Arc::new(DefaultClock));
    let app_health = health_state.clone();

    let server = HttpServer::new(move || build_app(app_health.clone(), http_state.clone()))
        .disable_signals()
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail both health probes, then stop the server gracefully.
pub async fn drain(health_state: &HealthState, handle: ServerHandle) {
    health_state.begin_draining();
    info!("draining HTTP server");
    handle.stop(true).await;
}

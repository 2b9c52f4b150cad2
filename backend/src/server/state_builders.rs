//! Builders for HTTP state from the configured storage collaborator.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;
use tracing::warn;

use rssagg::domain::ports::{FeedRepository, UserRepository};
use rssagg::domain::{FeedRegistryService, UserAccountsService};
use rssagg::inbound::http::state::HttpState;
use rssagg::outbound::InMemoryStore;
use rssagg::outbound::persistence::{DieselFeedRepository, DieselUserRepository};

use super::ServerConfig;

fn build_with_repositories<U, F>(
    users: Arc<U>,
    feeds: Arc<F>,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState>
where
    U: UserRepository + 'static,
    F: FeedRepository + 'static,
{
    web::Data::new(HttpState::new(
        Arc::new(UserAccountsService::new(users, Arc::clone(&clock))),
        Arc::new(FeedRegistryService::new(feeds, clock)),
    ))
}

/// Build the shared HTTP state.
///
/// Uses the Diesel repositories when a pool is configured, otherwise a
/// process-local [`InMemoryStore`] shared by both services.
pub(super) fn build_http_state(config: &ServerConfig, clock: Arc<dyn Clock>) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => build_with_repositories(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselFeedRepository::new(pool.clone())),
            clock,
        ),
        None => {
            warn!("no database configured; users and feeds are kept in memory");
            let store = Arc::new(InMemoryStore::new());
            build_with_repositories(Arc::clone(&store), store, clock)
        }
    }
}

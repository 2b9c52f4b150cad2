//! Shared HTTP adapter state.
//!
//! HTTP handlers and the API key gate accept this state via
//! `actix_web::web::Data` so they only depend on domain ports and remain
//! testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedRegistry, UserAccounts};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserAccounts>,
    pub feeds: Arc<dyn FeedRegistry>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(users: Arc<dyn UserAccounts>, feeds: Arc<dyn FeedRegistry>) -> Self {
        Self { users, feeds }
    }
}

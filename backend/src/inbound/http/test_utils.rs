//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeZone, Utc};

use crate::domain::ports::{MockFeedRegistry, MockUserAccounts};
use crate::domain::{ApiKey, User, UserId, UserName};
use crate::inbound::http::state::HttpState;

/// Build a registered user with a fixed key and timestamps.
pub fn sample_user(name: &str, api_key: &str) -> User {
    let stamp = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("valid fixture timestamp");
    User {
        id: UserId::random(),
        name: UserName::new(name).expect("valid fixture name"),
        api_key: ApiKey::new(api_key).expect("valid fixture key"),
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Wrap port doubles into shared handler state.
pub fn state_with(users: MockUserAccounts, feeds: MockFeedRegistry) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(users), Arc::new(feeds)))
}

/// A user accounts double that resolves exactly one key to `user`.
pub fn accounts_resolving(user: User) -> MockUserAccounts {
    let mut users = MockUserAccounts::new();
    let expected = user.api_key.clone();
    users
        .expect_find_by_api_key()
        .withf(move |key| *key == expected)
        .times(1)
        .return_once(move |_| Ok(Some(user)));
    users
}

//! User accounts domain service.
//!
//! Implements the [`UserAccounts`] driving port on top of a
//! [`UserRepository`]. Identifiers, API keys, and timestamps are produced
//! here, never by storage. Raw persistence failures are logged and replaced
//! with generic messages before leaving the domain.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, warn};

use crate::domain::ports::{UserAccounts, UserPersistenceError, UserRepository};
use crate::domain::{ApiKey, Error, NewUser, User, UserName};

/// Message returned when storage is unreachable.
pub(crate) const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable";

const CREATE_USER_FAILED: &str = "Couldn't create user";
const LOOKUP_USER_FAILED: &str = "Couldn't get user";

/// User accounts service implementing the driving port.
#[derive(Clone)]
pub struct UserAccountsService<R> {
    users: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserAccountsService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(users: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}

fn map_persistence_error(error: UserPersistenceError, message: &'static str) -> Error {
    match error {
        UserPersistenceError::Connection { message: detail } => {
            warn!(error = %detail, "user repository unavailable");
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        UserPersistenceError::Query { message: detail }
        | UserPersistenceError::DuplicateKey { message: detail } => {
            error!(error = %detail, "user repository query failed");
            Error::internal(message)
        }
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn register(&self, name: UserName) -> Result<User, Error> {
        let record = NewUser::issue(name, self.clock.utc());
        self.users
            .create(&record)
            .await
            .map_err(|err| map_persistence_error(err, CREATE_USER_FAILED))
    }

    async fn find_by_api_key(&self, api_key: &ApiKey) -> Result<Option<User>, Error> {
        self.users
            .find_by_api_key(api_key)
            .await
            .map_err(|err| map_persistence_error(err, LOOKUP_USER_FAILED))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for registration and key lookup.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use chrono::{DateTime, TimeZone, Utc};
    use mockable::MockClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn clock_at(now: DateTime<Utc>) -> Arc<dyn Clock> {
        let mut clock = MockClock::new();
        clock.expect_utc().return_const(now);
        Arc::new(clock)
    }

    fn make_service(repo: MockUserRepository, now: DateTime<Utc>) -> UserAccountsService<MockUserRepository> {
        UserAccountsService::new(Arc::new(repo), clock_at(now))
    }

    fn name(raw: &str) -> UserName {
        UserName::new(raw).expect("valid name")
    }

    #[rstest]
    #[tokio::test]
    async fn register_stamps_record_at_the_boundary(now: DateTime<Utc>) {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(move |record| {
                record.name.as_ref() == "Omkar"
                    && record.created_at == now
                    && record.updated_at == now
                    && record.api_key.as_str().len() == 64
            })
            .times(1)
            .returning(|record| Ok(User::from(record.clone())));

        let service = make_service(repo, now);
        let user = service.register(name("Omkar")).await.expect("user registered");

        assert_eq!(user.name.as_ref(), "Omkar");
        assert_eq!(user.created_at, now);
    }

    #[rstest]
    #[tokio::test]
    async fn register_twice_yields_distinct_users(now: DateTime<Utc>) {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(2)
            .returning(|record| Ok(User::from(record.clone())));

        let service = make_service(repo, now);
        let first = service.register(name("Omkar")).await.expect("first user");
        let second = service.register(name("Omkar")).await.expect("second user");

        assert_ne!(first.id, second.id);
        assert_ne!(first.api_key, second.api_key);
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("pool timed out"),
        ErrorCode::ServiceUnavailable,
        "Service unavailable"
    )]
    #[case(
        UserPersistenceError::query("relation users does not exist"),
        ErrorCode::InternalError,
        "Couldn't create user"
    )]
    #[case(
        UserPersistenceError::duplicate_key("users_api_key_key"),
        ErrorCode::InternalError,
        "Couldn't create user"
    )]
    #[tokio::test]
    async fn register_hides_storage_details(
        now: DateTime<Utc>,
        #[case] failure: UserPersistenceError,
        #[case] expected_code: ErrorCode,
        #[case] expected_message: &str,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = make_service(repo, now);
        let err = service
            .register(name("Omkar"))
            .await
            .expect_err("storage failure surfaces as domain error");

        assert_eq!(err.code(), expected_code);
        assert_eq!(err.message(), expected_message);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_api_key_passes_through_unknown_keys(now: DateTime<Utc>) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_api_key()
            .times(1)
            .returning(|_| Ok(None));

        let service = make_service(repo, now);
        let key = ApiKey::new("unassigned").expect("valid key");
        let found = service.find_by_api_key(&key).await.expect("lookup succeeds");

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_api_key_maps_query_failures(now: DateTime<Utc>) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_api_key()
            .times(1)
            .returning(|_| Err(UserPersistenceError::query("relation users does not exist")));

        let service = make_service(repo, now);
        let key = ApiKey::new("abc").expect("valid key");
        let err = service
            .find_by_api_key(&key)
            .await
            .expect_err("query failure surfaces");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Couldn't get user");
    }
}

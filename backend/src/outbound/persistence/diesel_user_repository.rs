//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Inserts the creation record exactly as issued by the domain and resolves
//! API keys with an exact, case-sensitive match against the unique
//! `users.api_key` index.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{ApiKey, NewUser, User, UserId, UserName};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    if is_unique_violation(&error) {
        return UserPersistenceError::duplicate_key("api key already issued");
    }
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Convert a stored row into the domain user.
///
/// Rows written by other tools may break domain invariants; those surface as
/// query errors rather than panics.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        created_at,
        updated_at,
        name,
        api_key,
    } = row;
    let name = UserName::new(name)
        .map_err(|err| UserPersistenceError::query(format!("stored user {id} is invalid: {err}")))?;
    let api_key = ApiKey::new(api_key)
        .map_err(|err| UserPersistenceError::query(format!("stored user {id} is invalid: {err}")))?;

    Ok(User {
        id: UserId::from_uuid(id),
        name,
        api_key,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: *user.id.as_uuid(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            name: user.name.as_ref(),
            api_key: user.api_key.as_str(),
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(stored)
    }

    async fn find_by_api_key(
        &self,
        api_key: &ApiKey,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::api_key.eq(api_key.as_str()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion and error mapping; database round trips need a live
    //! PostgreSQL instance and are not exercised here.
    use super::*;
    use chrono::Utc;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;
    use uuid::Uuid;

    fn row(name: &str, api_key: &str) -> UserRow {
        let now = Utc::now();
        UserRow {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    #[rstest]
    fn row_to_user_keeps_stored_values() {
        let stored = row("Omkar", "abc123");
        let id = stored.id;

        let user = row_to_user(stored).expect("valid row");

        assert_eq!(user.id, UserId::from_uuid(id));
        assert_eq!(user.name.as_ref(), "Omkar");
        assert_eq!(user.api_key.as_str(), "abc123");
    }

    #[rstest]
    #[case::blank_name(" ", "abc123")]
    #[case::blank_key("Omkar", "")]
    fn row_to_user_rejects_corrupt_rows(#[case] name: &str, #[case] api_key: &str) {
        let err = row_to_user(row(name, api_key)).expect_err("corrupt row");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn unique_violations_become_duplicate_keys() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        ));
        assert!(matches!(err, UserPersistenceError::DuplicateKey { .. }));
    }

    #[rstest]
    fn pool_checkout_failures_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}

//! Diesel table definitions for the feed registry schema.
//!
//! The tables are created by externally managed migrations; these
//! definitions must track them column for column.

diesel::table! {
    /// Registered users and their API keys.
    users (id) {
        /// Primary key: UUID v4 generated by the application.
        id -> Uuid,
        /// Creation timestamp supplied by the application.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
        /// Display name; not unique.
        name -> Text,
        /// 64 hex characters, unique index `users_api_key_key`.
        api_key -> Varchar,
    }
}

diesel::table! {
    /// Feeds registered by users.
    feeds (id) {
        id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        name -> Text,
        url -> Text,
        /// Owning user; foreign key to `users.id` with cascade delete.
        user_id -> Uuid,
    }
}

diesel::joinable!(feeds -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(feeds, users);

//! This module contains all functions for interacting with the `users` table.
//! It is the single source of truth for creating, refreshing, and
//! deactivating user records.

use crate::database::models::User;
use serenity::model::id::UserId;
use sqlx::PgPool;

/// Upserts a user by primary id. Every inbound message lands here, so the
/// display fields always reflect the latest activity and `is_active` is
/// forced back to true. The upsert is a single statement so concurrent
/// messages from the same user cannot race a lookup-then-write.
pub async fn create_or_update(
    pool: &PgPool,
    user_id: UserId,
    username: &str,
    first_name: &str,
    last_name: &str,
) -> Result<User, sqlx::Error> {
    let user_id_i64 = user_id.get() as i64;
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, first_name, last_name, is_active)
        VALUES ($1, $2, $3, $4, TRUE)
        ON CONFLICT (id) DO UPDATE SET
            username = EXCLUDED.username,
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            is_active = TRUE,
            updated_at = NOW()
        RETURNING id, username, first_name, last_name, is_active, created_at, updated_at
        "#,
    )
    .bind(user_id_i64)
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

pub async fn get_user(pool: &PgPool, user_id: UserId) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, first_name, last_name, is_active, created_at, updated_at
         FROM users WHERE id = $1",
    )
    .bind(user_id.get() as i64)
    .fetch_optional(pool)
    .await
}

/// All currently active users. Also doubles as the persistence probe for the
/// health endpoint.
pub async fn list_active(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, first_name, last_name, is_active, created_at, updated_at
         FROM users WHERE is_active = TRUE",
    )
    .fetch_all(pool)
    .await
}

/// Soft-disables a user. The record and its history are retained.
pub async fn deactivate(pool: &PgPool, user_id: UserId) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(user_id.get() as i64)
        .execute(pool)
        .await?;
    Ok(())
}

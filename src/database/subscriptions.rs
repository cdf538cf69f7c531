//! Subscription rows backing the subscribe/unsubscribe commands. The
//! notification delivery loop that would read them lives in a separate
//! service; this bot only flips the flag.

use crate::database::models::Subscription;
use serenity::model::id::UserId;
use sqlx::PgPool;

pub async fn set_active(
    pool: &PgPool,
    user_id: UserId,
    active: bool,
) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (user_id, is_active)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET
            is_active = EXCLUDED.is_active,
            updated_at = NOW()
        RETURNING id, user_id, is_active, settings, created_at, updated_at
        "#,
    )
    .bind(user_id.get() as i64)
    .bind(active)
    .fetch_one(pool)
    .await
}

pub async fn get_subscription(
    pool: &PgPool,
    user_id: UserId,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT id, user_id, is_active, settings, created_at, updated_at
         FROM subscriptions WHERE user_id = $1",
    )
    .bind(user_id.get() as i64)
    .fetch_optional(pool)
    .await
}

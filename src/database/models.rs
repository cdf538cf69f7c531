//! Row types for the persisted entities. Audit columns (`created_at`,
//! `updated_at`, `is_active`) are explicit fields set by SQL, never implied.

use sqlx::types::chrono::{DateTime, Utc};

/// A messaging-platform user. `id` is the platform's numeric user id and the
/// stable primary identity; every inbound message refreshes the display
/// fields. Deactivation is a soft delete: the row is retained.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's saved reference to a listing. Title, price, and url are snapshots
/// taken when the favorite was first created; the listing itself lives in the
/// external API and may change or vanish afterwards. At most one row exists
/// per (user_id, listing_id) pair, enforced by a unique constraint.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub listing_id: String,
    pub title: String,
    pub price: String,
    pub url: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// A notification subscription. Rows are written by the subscribe and
/// unsubscribe commands; the delivery loop that would consume them is a
/// separate service.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub is_active: bool,
    pub settings: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

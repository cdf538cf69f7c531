//! This module contains all functions for interacting with the `favorites`
//! table. The (user_id, listing_id) unique constraint is the only atomicity
//! guarantee the application needs: updates are dispatched concurrently with
//! no ordering, so every mutation here is a single statement.

use crate::database::models::Favorite;
use crate::services::listings::Listing;
use serenity::model::id::UserId;
use sqlx::PgPool;

const FAVORITE_COLUMNS: &str =
    "id, user_id, listing_id, title, price, url, note, created_at";

/// Saves a listing to the user's favorites, snapshotting title, price, and
/// url. Repeat saves of the same listing never create a second row: the
/// existing snapshot is kept, and the note is overwritten only when the
/// incoming note is non-empty. Returns the resulting row either way.
pub async fn add_to_favorites(
    pool: &PgPool,
    user_id: UserId,
    listing: &Listing,
    note: &str,
) -> Result<Favorite, sqlx::Error> {
    let favorite = sqlx::query_as::<_, Favorite>(&format!(
        r#"
        INSERT INTO favorites (user_id, listing_id, title, price, url, note)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id, listing_id) DO UPDATE SET
            note = CASE WHEN EXCLUDED.note <> '' THEN EXCLUDED.note ELSE favorites.note END
        RETURNING {FAVORITE_COLUMNS}
        "#
    ))
    .bind(user_id.get() as i64)
    .bind(&listing.id)
    .bind(&listing.title)
    .bind(&listing.price)
    .bind(&listing.url)
    .bind(note)
    .fetch_one(pool)
    .await?;
    Ok(favorite)
}

/// Removes a favorite. Removing a pair that is not stored is a no-op success.
pub async fn remove_from_favorites(
    pool: &PgPool,
    user_id: UserId,
    listing_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND listing_id = $2")
        .bind(user_id.get() as i64)
        .bind(listing_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All favorites for a user, most recently saved first.
pub async fn list_favorites(pool: &PgPool, user_id: UserId) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(&format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(user_id.get() as i64)
    .fetch_all(pool)
    .await
}

pub async fn get_favorite(
    pool: &PgPool,
    user_id: UserId,
    listing_id: &str,
) -> Result<Option<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(&format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE user_id = $1 AND listing_id = $2"
    ))
    .bind(user_id.get() as i64)
    .bind(listing_id)
    .fetch_optional(pool)
    .await
}

pub async fn is_favorite(
    pool: &PgPool,
    user_id: UserId,
    listing_id: &str,
) -> Result<bool, sqlx::Error> {
    let exists: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND listing_id = $2)",
    )
    .bind(user_id.get() as i64)
    .bind(listing_id)
    .fetch_one(pool)
    .await?;
    Ok(exists.0)
}

pub async fn update_note(
    pool: &PgPool,
    user_id: UserId,
    listing_id: &str,
    note: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE favorites SET note = $3 WHERE user_id = $1 AND listing_id = $2")
        .bind(user_id.get() as i64)
        .bind(listing_id)
        .bind(note)
        .execute(pool)
        .await?;
    Ok(())
}

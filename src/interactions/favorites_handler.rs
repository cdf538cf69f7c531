//! Handles button presses originating from the favorites view.

use crate::ui::style::error_embed;
use crate::{AppState, database};
use serenity::builder::CreateMessage;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const FAVORITE_REMOVED_MSG: &str = "🗑️ Listing removed from your favorites.";
pub const FAVORITE_REMOVE_FAILED_MSG: &str =
    "Could not remove the favorite right now. Please try again later.";

/// Removes a favorite. Removal is idempotent, so a stale button pointing at
/// an already-removed favorite still confirms success.
pub async fn handle_remove(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
    listing_id: &str,
) {
    match database::favorites::remove_from_favorites(&app_state.db, component.user.id, listing_id)
        .await
    {
        Ok(()) => {
            component
                .channel_id
                .say(&ctx.http, FAVORITE_REMOVED_MSG)
                .await
                .ok();
        }
        Err(e) => {
            error!(
                user_id = component.user.id.get(),
                listing_id, error = %e,
                "failed to remove favorite"
            );
            let builder =
                CreateMessage::new().embed(error_embed("Favorites unavailable", FAVORITE_REMOVE_FAILED_MSG));
            component
                .channel_id
                .send_message(&ctx.http, builder)
                .await
                .ok();
        }
    }
}

//! Implements the run logic for the `favorites` command.

use super::ui;
use crate::ui::style::error_embed;
use crate::{AppState, database};
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const NO_FAVORITES_MSG: &str = "⭐ You have no favorite listings yet.";
pub const FAVORITES_FAILED_MSG: &str =
    "Could not load your favorites right now. Please try again later.";

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    let favorites = match database::favorites::list_favorites(&app_state.db, msg.author.id).await {
        Ok(favorites) => favorites,
        Err(e) => {
            error!(user_id = msg.author.id.get(), error = %e, "failed to load favorites");
            let builder = CreateMessage::new()
                .embed(error_embed("Favorites unavailable", FAVORITES_FAILED_MSG));
            msg.channel_id.send_message(&ctx.http, builder).await.ok();
            return;
        }
    };

    if favorites.is_empty() {
        msg.channel_id.say(&ctx.http, NO_FAVORITES_MSG).await.ok();
        return;
    }

    let builder = CreateMessage::new()
        .embed(ui::create_favorites_embed(&favorites))
        .components(ui::create_favorites_keyboard(&favorites));
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

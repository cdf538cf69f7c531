//! The `start` command: a short welcome explaining what the bot does.

use crate::AppState;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::sync::Arc;

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    let prefix = &app_state.prefix;
    let welcome = format!(
        "🏠 Welcome to the real-estate listings bot!\n\n\
         This bot helps you:\n\
         • 📋 Browse current property listings\n\
         • ⭐ Save listings to your favorites\n\
         • 🔔 Subscribe to new-listing notifications\n\
         • ⚙️ View the search settings\n\n\
         Use `{prefix}help` for the list of commands."
    );
    msg.channel_id.say(&ctx.http, welcome).await.ok();
}

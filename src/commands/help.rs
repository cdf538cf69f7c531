//! The `help` command.

use crate::AppState;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::sync::Arc;

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    let p = &app_state.prefix;
    let help = format!(
        "📖 Available commands:\n\n\
         `{p}start` - Get started with the bot\n\
         `{p}help` - Show this help\n\
         `{p}listings` - Show current listings\n\
         `{p}favorites` - Show your favorite listings\n\
         `{p}settings` - Show the current search settings\n\
         `{p}subscribe` - Subscribe to notifications\n\
         `{p}unsubscribe` - Unsubscribe from notifications\n\n\
         💡 Tip: you can save listings to favorites straight from the list!"
    );
    msg.channel_id.say(&ctx.http, help).await.ok();
}

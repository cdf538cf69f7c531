//! The `settings` command: renders the search settings owned by the
//! external listings API.

use crate::AppState;
use crate::ui::style::{COLOR_SETTINGS, error_embed};
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const SETTINGS_FAILED_MSG: &str =
    "Could not fetch the search settings right now. Please try again later.";

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    let settings = match app_state.listings.get_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "failed to fetch settings");
            let builder =
                CreateMessage::new().embed(error_embed("Settings unavailable", SETTINGS_FAILED_MSG));
            msg.channel_id.send_message(&ctx.http, builder).await.ok();
            return;
        }
    };

    let mut lines: Vec<String> = settings
        .iter()
        .map(|(key, value)| format!("• **{key}:** {value}"))
        .collect();
    lines.sort();

    let embed = CreateEmbed::new()
        .title("⚙️ Current search settings")
        .description(lines.join("\n"))
        .footer(serenity::builder::CreateEmbedFooter::new(
            "Settings are managed by the listings service administrator.",
        ))
        .color(COLOR_SETTINGS);
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
        .ok();
}

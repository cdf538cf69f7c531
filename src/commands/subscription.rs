//! The `subscribe` and `unsubscribe` commands. These only flip the persisted
//! subscription flag; delivery of notifications is a separate service.

use crate::ui::style::error_embed;
use crate::{AppState, database};
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const SUBSCRIBED_MSG: &str =
    "🔔 Subscription activated! You will be notified about new listings.";
pub const UNSUBSCRIBED_MSG: &str = "🔕 Subscription disabled.";
pub const SUBSCRIPTION_FAILED_MSG: &str =
    "Could not update your subscription right now. Please try again later.";

pub async fn run_subscribe(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    set_subscription(ctx, msg, app_state, true).await;
}

pub async fn run_unsubscribe(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    set_subscription(ctx, msg, app_state, false).await;
}

async fn set_subscription(ctx: &Context, msg: &Message, app_state: Arc<AppState>, active: bool) {
    match database::subscriptions::set_active(&app_state.db, msg.author.id, active).await {
        Ok(_) => {
            let reply = if active { SUBSCRIBED_MSG } else { UNSUBSCRIBED_MSG };
            msg.channel_id.say(&ctx.http, reply).await.ok();
        }
        Err(e) => {
            error!(user_id = msg.author.id.get(), active, error = %e, "failed to update subscription");
            let builder = CreateMessage::new()
                .embed(error_embed("Subscription unavailable", SUBSCRIPTION_FAILED_MSG));
            msg.channel_id.send_message(&ctx.http, builder).await.ok();
        }
    }
}

//! Implements the run logic for the `listings` command.

use super::ui;
use crate::AppState;
use crate::ui::style::error_embed;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const NO_LISTINGS_MSG: &str = "📭 No listings found.";
pub const LISTINGS_FAILED_MSG: &str =
    "Could not fetch listings right now. Please try again later.";

pub async fn run_prefix(ctx: &Context, msg: &Message, app_state: Arc<AppState>) {
    send_listings_page(ctx, msg.channel_id, app_state, 0, false).await;
}

/// Fetches listings and sends the requested page as a fresh message.
/// An out-of-range page is a silent no-op (stale button).
pub async fn send_listings_page(
    ctx: &Context,
    channel_id: ChannelId,
    app_state: Arc<AppState>,
    page: usize,
    force_refresh: bool,
) {
    let listings = match app_state.listings.get_listings(force_refresh).await {
        Ok(listings) => listings,
        Err(e) => {
            error!(error = %e, "failed to fetch listings");
            let builder =
                CreateMessage::new().embed(error_embed("Listings unavailable", LISTINGS_FAILED_MSG));
            channel_id.send_message(&ctx.http, builder).await.ok();
            return;
        }
    };

    if listings.is_empty() {
        channel_id.say(&ctx.http, NO_LISTINGS_MSG).await.ok();
        return;
    }

    let Some(page_view) = ui::paginate(&listings, page) else {
        return;
    };

    let builder = CreateMessage::new()
        .embed(ui::create_page_embed(&page_view))
        .components(ui::create_listings_keyboard(&page_view));
    channel_id.send_message(&ctx.http, builder).await.ok();
}

//! Handles button presses originating from the listings view: saving a
//! listing to favorites, page navigation, and the refresh action.

use crate::commands::listings::{run as listings_run, ui};
use crate::interactions::ids::Action;
use crate::ui::style::error_embed;
use crate::{AppState, database};
use serenity::builder::{CreateMessage, EditMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::error;

pub const LISTING_NOT_FOUND_MSG: &str = "❌ Listing not found. It may have been taken down.";
pub const FAVORITE_ADD_FAILED_MSG: &str =
    "Could not save the listing right now. Please try again later.";

pub async fn handle(
    ctx: &Context,
    component: &mut ComponentInteraction,
    app_state: Arc<AppState>,
    action: Action,
) {
    match action {
        Action::FavAdd(listing_id) => add_favorite(ctx, component, app_state, &listing_id).await,
        Action::ListingsPage(page) => render_page(ctx, component, app_state, page, false).await,
        Action::RefreshListings => render_page(ctx, component, app_state, 0, true).await,
        Action::BackToListings => {
            // The press came from the favorites view, so leave that message
            // alone and post the listings as a fresh message.
            listings_run::send_listings_page(ctx, component.channel_id, app_state, 0, false).await;
        }
        Action::FavRemove(_) => {}
    }
}

/// Resolves the pressed listing against the current collection and upserts
/// the favorite. The listing may have vanished between render and press;
/// that is a user-visible not-found, not a system error.
async fn add_favorite(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
    listing_id: &str,
) {
    let listings = match app_state.listings.get_listings(false).await {
        Ok(listings) => listings,
        Err(e) => {
            error!(error = %e, "failed to fetch listings for favorite add");
            send_error(ctx, component, "Listings unavailable", FAVORITE_ADD_FAILED_MSG).await;
            return;
        }
    };

    let Some(listing) = listings.iter().find(|l| l.id == listing_id) else {
        component
            .channel_id
            .say(&ctx.http, LISTING_NOT_FOUND_MSG)
            .await
            .ok();
        return;
    };

    match database::favorites::add_to_favorites(&app_state.db, component.user.id, listing, "").await
    {
        Ok(_) => {
            let confirmation = format!("⭐ \"{}\" saved to your favorites!", listing.title);
            component.channel_id.say(&ctx.http, confirmation).await.ok();
        }
        Err(e) => {
            error!(
                user_id = component.user.id.get(),
                listing_id, error = %e,
                "failed to save favorite"
            );
            send_error(ctx, component, "Favorites unavailable", FAVORITE_ADD_FAILED_MSG).await;
        }
    }
}

/// Re-renders the originating message to the requested page. Out-of-range
/// pages are stale buttons and render nothing.
async fn render_page(
    ctx: &Context,
    component: &mut ComponentInteraction,
    app_state: Arc<AppState>,
    page: usize,
    force_refresh: bool,
) {
    let listings = match app_state.listings.get_listings(force_refresh).await {
        Ok(listings) => listings,
        Err(e) => {
            error!(error = %e, force_refresh, "failed to fetch listings for page render");
            send_error(
                ctx,
                component,
                "Listings unavailable",
                listings_run::LISTINGS_FAILED_MSG,
            )
            .await;
            return;
        }
    };

    if listings.is_empty() {
        let builder = EditMessage::new()
            .content(listings_run::NO_LISTINGS_MSG)
            .embeds(Vec::new())
            .components(Vec::new());
        component.message.edit(&ctx.http, builder).await.ok();
        return;
    }

    let Some(page_view) = ui::paginate(&listings, page) else {
        return;
    };

    let builder = EditMessage::new()
        .embed(ui::create_page_embed(&page_view))
        .components(ui::create_listings_keyboard(&page_view));
    component.message.edit(&ctx.http, builder).await.ok();
}

async fn send_error(ctx: &Context, component: &ComponentInteraction, title: &str, text: &str) {
    let builder = CreateMessage::new().embed(error_embed(title, text));
    component
        .channel_id
        .send_message(&ctx.http, builder)
        .await
        .ok();
}

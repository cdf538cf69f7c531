//! Pagination and keyboard construction for the listings view.
//!
//! Everything here is pure: the handlers feed a listing collection and a
//! page index in, and get an embed plus button rows back. Page slicing and
//! navigation-button policy live in small free functions so they can be
//! exercised directly by the integration tests.

use crate::interactions::ids::Action;
use crate::services::listings::Listing;
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_LISTINGS, EMOJI_FAVORITE, EMOJI_LISTING, EMOJI_REFRESH};
use serenity::builder::{CreateActionRow, CreateEmbed};

pub const PAGE_SIZE: usize = 5;
const DESCRIPTION_LIMIT: usize = 200;

/// One displayed page of the listing collection.
pub struct ListingsPage<'a> {
    pub items: &'a [Listing],
    pub page: usize,
    pub total_pages: usize,
    /// Absolute index of the first displayed item, for "X-Y of N" headers
    /// and per-item button numbering.
    pub start: usize,
    pub total: usize,
}

/// `ceil(count / PAGE_SIZE)`, minimum one page. Callers special-case an
/// empty collection before rendering; the minimum only keeps page
/// arithmetic well-defined.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Slices out the requested page. A page outside `[0, total_pages)` returns
/// `None`: such requests come from stale buttons and must render nothing.
pub fn paginate(listings: &[Listing], page: usize) -> Option<ListingsPage<'_>> {
    let total_pages = total_pages(listings.len());
    if page >= total_pages {
        return None;
    }
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(listings.len());
    Some(ListingsPage {
        items: &listings[start..end],
        page,
        total_pages,
        start,
        total: listings.len(),
    })
}

/// Navigation actions for a page: previous only when one exists, then next
/// only when one exists, in that left-to-right order.
pub fn nav_actions(page: usize, total_pages: usize) -> Vec<Action> {
    let mut actions = Vec::new();
    if page > 0 {
        actions.push(Action::ListingsPage(page - 1));
    }
    if page + 1 < total_pages {
        actions.push(Action::ListingsPage(page + 1));
    }
    actions
}

/// Formats one listing as a display block. Only fields the API actually
/// filled in are shown; the description is clipped to keep five listings
/// inside one embed.
pub fn format_listing(listing: &Listing) -> String {
    let mut lines = vec![
        format!("{EMOJI_LISTING} **{}**", listing.title),
        format!("💰 **{}**", listing.price),
    ];
    if !listing.address.is_empty() {
        lines.push(format!("📍 {}", listing.address));
    }
    if !listing.area.is_empty() {
        lines.push(format!("📐 Area: {}", listing.area));
    }
    if !listing.rooms.is_empty() {
        lines.push(format!("🚪 Rooms: {}", listing.rooms));
    }
    if !listing.floor.is_empty() {
        lines.push(format!("🏢 Floor: {}", listing.floor));
    }
    if !listing.metro.is_empty() {
        lines.push(format!("🚇 Metro: {}", listing.metro));
    }
    if !listing.description.is_empty() {
        lines.push(format!("📝 {}", clip(&listing.description, DESCRIPTION_LIMIT)));
    }
    if !listing.url.is_empty() {
        lines.push(format!("🔗 [View listing]({})", listing.url));
    }
    if !listing.published_at.is_empty() {
        lines.push(format!("🕐 Published: {}", listing.published_at));
    }
    lines.join("\n")
}

pub fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let clipped: String = text.chars().take(limit).collect();
    format!("{clipped}...")
}

/// Builds the embed for a listings page.
pub fn create_page_embed(page: &ListingsPage<'_>) -> CreateEmbed {
    let blocks: Vec<String> = page.items.iter().map(format_listing).collect();
    CreateEmbed::new()
        .title(format!(
            "{EMOJI_LISTING} Listings ({}-{} of {})",
            page.start + 1,
            page.start + page.items.len(),
            page.total
        ))
        .description(blocks.join("\n---\n"))
        .color(COLOR_LISTINGS)
}

/// Builds the button rows for a listings page: one save button per displayed
/// item, a navigation row when there is anywhere to go, and a refresh row.
pub fn create_listings_keyboard(page: &ListingsPage<'_>) -> Vec<CreateActionRow> {
    let mut rows = Vec::new();

    for (i, listing) in page.items.iter().enumerate() {
        let action = Action::FavAdd(listing.id.clone());
        let label = format!("{EMOJI_FAVORITE} Save listing ({})", page.start + i + 1);
        rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
            &action.encode(),
            &label,
        )]));
    }

    let mut nav = Vec::new();
    for action in nav_actions(page.page, page.total_pages) {
        let label = match &action {
            Action::ListingsPage(p) if *p < page.page => "⬅️ Previous".to_string(),
            _ => "Next ➡️".to_string(),
        };
        nav.push(Btn::primary(&action.encode(), &label));
    }
    if !nav.is_empty() {
        rows.push(CreateActionRow::Buttons(nav));
    }

    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        &Action::RefreshListings.encode(),
        &format!("{EMOJI_REFRESH} Refresh"),
    )]));

    rows
}

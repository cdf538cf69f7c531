//! View construction for the favorites list.

use crate::database::models::Favorite;
use crate::interactions::ids::Action;
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_FAVORITES, EMOJI_FAVORITE, EMOJI_REMOVE};
use serenity::builder::{CreateActionRow, CreateEmbed};

/// The remove-button list is capped so a long favorites list cannot blow the
/// component limit; the text list above it still shows everything.
pub const MAX_REMOVE_BUTTONS: usize = 10;

pub fn create_favorites_embed(favorites: &[Favorite]) -> CreateEmbed {
    let mut blocks = Vec::new();
    for (i, favorite) in favorites.iter().enumerate() {
        let mut lines = vec![
            format!("**{}.** [{}]({})", i + 1, favorite.title, favorite.url),
            format!("💰 {}", favorite.price),
        ];
        if !favorite.note.is_empty() {
            lines.push(format!("📝 **Note:** {}", favorite.note));
        }
        lines.push(format!(
            "🕒 Saved: {}",
            favorite.created_at.format("%d.%m.%Y %H:%M")
        ));
        blocks.push(lines.join("\n"));
    }

    CreateEmbed::new()
        .title(format!(
            "{EMOJI_FAVORITE} Your favorite listings ({})",
            favorites.len()
        ))
        .description(blocks.join("\n\n"))
        .color(COLOR_FAVORITES)
}

/// One remove button per favorite, capped at [`MAX_REMOVE_BUTTONS`], plus a
/// row returning to the listings view.
pub fn create_favorites_keyboard(favorites: &[Favorite]) -> Vec<CreateActionRow> {
    let mut rows = Vec::new();

    for (i, favorite) in favorites.iter().take(MAX_REMOVE_BUTTONS).enumerate() {
        let action = Action::FavRemove(favorite.listing_id.clone());
        let label = format!("{EMOJI_REMOVE} Remove ({})", i + 1);
        rows.push(CreateActionRow::Buttons(vec![Btn::danger(
            &action.encode(),
            &label,
        )]));
    }

    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        &Action::BackToListings.encode(),
        "📋 Back to listings",
    )]));

    rows
}

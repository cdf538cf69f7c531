//! Central UI style constants and helpers.

use serenity::builder::CreateEmbed;

pub const COLOR_LISTINGS: u32 = 0x2ECC71; // Green
pub const COLOR_FAVORITES: u32 = 0xF1C40F; // Gold
pub const COLOR_SETTINGS: u32 = 0x3498DB; // Blue
pub const COLOR_INFO: u32 = 0x9B59B6; // Purple
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_LISTING: &str = "🏠";
pub const EMOJI_FAVORITE: &str = "⭐";
pub const EMOJI_REMOVE: &str = "🗑️";
pub const EMOJI_REFRESH: &str = "🔄";

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

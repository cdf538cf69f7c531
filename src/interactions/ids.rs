//! Action payloads carried in component custom_ids.
//!
//! The wire form is `verb` or `verb:param`. These strings round-trip through
//! the messaging platform, so a press can arrive long after the message that
//! created it; anything that fails to decode is treated as stale UI and
//! ignored rather than surfaced as an error.

pub const FAV_ADD: &str = "fav_add";
pub const FAV_REMOVE: &str = "fav_remove";
pub const LISTINGS_PAGE: &str = "listings_page";
pub const REFRESH_LISTINGS: &str = "refresh_listings";
pub const BACK_TO_LISTINGS: &str = "back_to_listings";

/// A decoded button action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Save the listing with this id to the presser's favorites.
    FavAdd(String),
    /// Remove the listing with this id from the presser's favorites.
    FavRemove(String),
    /// Show this zero-based page of the listing collection.
    ListingsPage(usize),
    /// Re-fetch listings, bypassing caches, and show page 0.
    RefreshListings,
    /// Return to page 0 of the last-known listing collection.
    BackToListings,
}

impl Action {
    /// Encodes the action into its custom_id wire form.
    pub fn encode(&self) -> String {
        match self {
            Action::FavAdd(id) => format!("{FAV_ADD}:{id}"),
            Action::FavRemove(id) => format!("{FAV_REMOVE}:{id}"),
            Action::ListingsPage(page) => format!("{LISTINGS_PAGE}:{page}"),
            Action::RefreshListings => REFRESH_LISTINGS.to_string(),
            Action::BackToListings => BACK_TO_LISTINGS.to_string(),
        }
    }

    /// Decodes a custom_id. Returns `None` for unknown verbs, missing or
    /// empty parameters, and non-numeric page indices.
    pub fn decode(data: &str) -> Option<Action> {
        match data.split_once(':') {
            None => match data {
                REFRESH_LISTINGS => Some(Action::RefreshListings),
                BACK_TO_LISTINGS => Some(Action::BackToListings),
                _ => None,
            },
            Some((verb, param)) => match verb {
                FAV_ADD if !param.is_empty() => Some(Action::FavAdd(param.to_string())),
                FAV_REMOVE if !param.is_empty() => Some(Action::FavRemove(param.to_string())),
                LISTINGS_PAGE => param.parse::<usize>().ok().map(Action::ListingsPage),
                _ => None,
            },
        }
    }
}

use chrono::Utc;
use homescout_bot::commands::favorites::ui::{MAX_REMOVE_BUTTONS, create_favorites_keyboard};
use homescout_bot::database::models::Favorite;

fn sample_favorites(n: usize) -> Vec<Favorite> {
    (0..n)
        .map(|i| Favorite {
            id: i as i64,
            user_id: 42,
            listing_id: format!("listing-{i}"),
            title: format!("Listing {i}"),
            price: "100 000".to_string(),
            url: format!("https://example.com/{i}"),
            note: String::new(),
            created_at: Utc::now(),
        })
        .collect()
}

#[test]
fn one_remove_button_per_favorite_plus_back_row() {
    let favorites = sample_favorites(3);
    assert_eq!(create_favorites_keyboard(&favorites).len(), 4);
}

#[test]
fn remove_buttons_are_capped() {
    let favorites = sample_favorites(25);
    let rows = create_favorites_keyboard(&favorites);
    assert_eq!(rows.len(), MAX_REMOVE_BUTTONS + 1);
}

#[test]
fn no_favorites_still_gets_a_back_row() {
    // The command path never renders a keyboard for an empty list (it sends
    // the "no favorites yet" message instead); the builder itself stays total.
    let rows = create_favorites_keyboard(&[]);
    assert_eq!(rows.len(), 1);
}

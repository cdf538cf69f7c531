use homescout_bot::interactions::ids::Action;

#[test]
fn decode_fav_add_with_param() {
    assert_eq!(
        Action::decode("fav_add:abc123"),
        Some(Action::FavAdd("abc123".to_string()))
    );
}

#[test]
fn decode_fav_remove_with_param() {
    assert_eq!(
        Action::decode("fav_remove:xyz"),
        Some(Action::FavRemove("xyz".to_string()))
    );
}

#[test]
fn decode_bare_verbs() {
    assert_eq!(
        Action::decode("refresh_listings"),
        Some(Action::RefreshListings)
    );
    assert_eq!(
        Action::decode("back_to_listings"),
        Some(Action::BackToListings)
    );
}

#[test]
fn decode_page_index() {
    assert_eq!(Action::decode("listings_page:0"), Some(Action::ListingsPage(0)));
    assert_eq!(Action::decode("listings_page:7"), Some(Action::ListingsPage(7)));
}

#[test]
fn decode_rejects_malformed_payloads() {
    assert_eq!(Action::decode(""), None);
    assert_eq!(Action::decode("bogus_verb"), None);
    assert_eq!(Action::decode("bogus_verb:1"), None);
    // Parameterized verbs need a non-empty parameter.
    assert_eq!(Action::decode("fav_add"), None);
    assert_eq!(Action::decode("fav_add:"), None);
    assert_eq!(Action::decode("fav_remove:"), None);
    // Page index must be a non-negative integer.
    assert_eq!(Action::decode("listings_page:abc"), None);
    assert_eq!(Action::decode("listings_page:-1"), None);
    assert_eq!(Action::decode("listings_page:"), None);
    // Bare verbs take no parameter.
    assert_eq!(Action::decode("refresh_listings:5"), None);
    assert_eq!(Action::decode("back_to_listings:x"), None);
}

#[test]
fn encode_decode_round_trip() {
    let actions = [
        Action::FavAdd("listing-42".to_string()),
        Action::FavRemove("listing-42".to_string()),
        Action::ListingsPage(3),
        Action::RefreshListings,
        Action::BackToListings,
    ];
    for action in actions {
        assert_eq!(Action::decode(&action.encode()), Some(action));
    }
}

#[test]
fn decode_keeps_colons_inside_listing_id() {
    assert_eq!(
        Action::decode("fav_add:ns:123"),
        Some(Action::FavAdd("ns:123".to_string()))
    );
}

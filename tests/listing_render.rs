use homescout_bot::commands::listings::ui::format_listing;
use homescout_bot::services::listings::Listing;

#[test]
fn format_skips_absent_fields() {
    let listing = Listing {
        id: "1".to_string(),
        title: "Two-room flat".to_string(),
        price: "9 000 000".to_string(),
        url: "https://example.com/1".to_string(),
        ..Default::default()
    };
    let text = format_listing(&listing);
    assert!(text.contains("Two-room flat"));
    assert!(text.contains("9 000 000"));
    assert!(!text.contains("Area:"));
    assert!(!text.contains("Metro:"));
    assert!(!text.contains("Published:"));
}

#[test]
fn format_includes_present_fields_and_clips_description() {
    let listing = Listing {
        id: "2".to_string(),
        title: "Studio".to_string(),
        price: "5 000 000".to_string(),
        address: "Lenina st. 1".to_string(),
        area: "25 m²".to_string(),
        rooms: "1".to_string(),
        floor: "3/9".to_string(),
        metro: "Central".to_string(),
        description: "d".repeat(300),
        url: "https://example.com/2".to_string(),
        published_at: "2026-08-01".to_string(),
        ..Default::default()
    };
    let text = format_listing(&listing);
    assert!(text.contains("Lenina st. 1"));
    assert!(text.contains("Area: 25 m²"));
    assert!(text.contains("Rooms: 1"));
    assert!(text.contains("Floor: 3/9"));
    assert!(text.contains("Metro: Central"));
    assert!(text.contains("Published: 2026-08-01"));
    assert!(text.contains(&format!("{}...", "d".repeat(200))));
    assert!(!text.contains(&"d".repeat(201)));
}

#[test]
fn listing_deserializes_with_missing_fields() {
    let listing: Listing =
        serde_json::from_str(r#"{"id":"abc","title":"Flat","price":"1"}"#).expect("should parse");
    assert_eq!(listing.id, "abc");
    assert_eq!(listing.price_value, 0);
    assert!(listing.photos.is_empty());

    let full: Listing = serde_json::from_str(
        r#"{"id":"x","title":"t","price":"p","price_value":123,"address":"a",
            "url":"u","description":"d","photos":["p1","p2"],"area":"ar",
            "rooms":"2","floor":"5","metro":"m","published_at":"yesterday"}"#,
    )
    .expect("should parse");
    assert_eq!(full.price_value, 123);
    assert_eq!(full.photos.len(), 2);
}

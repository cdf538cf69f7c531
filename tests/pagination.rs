use homescout_bot::commands::listings::ui::{
    PAGE_SIZE, clip, create_listings_keyboard, nav_actions, paginate, total_pages,
};
use homescout_bot::interactions::ids::Action;
use homescout_bot::services::listings::Listing;

fn sample_listings(n: usize) -> Vec<Listing> {
    (0..n)
        .map(|i| Listing {
            id: format!("listing-{i}"),
            title: format!("Listing {i}"),
            price: "100 000".to_string(),
            url: format!("https://example.com/{i}"),
            ..Default::default()
        })
        .collect()
}

#[test]
fn total_pages_is_ceil_with_minimum_one() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(5), 1);
    assert_eq!(total_pages(6), 2);
    assert_eq!(total_pages(10), 2);
    assert_eq!(total_pages(11), 3);
    for n in 0..=50 {
        assert_eq!(total_pages(n), n.div_ceil(PAGE_SIZE).max(1), "n = {n}");
    }
}

#[test]
fn pages_partition_the_collection_in_order() {
    for n in [1, 4, 5, 6, 12, 23] {
        let listings = sample_listings(n);
        let pages = total_pages(n);
        let mut reassembled = Vec::new();
        for page in 0..pages {
            let view = paginate(&listings, page).expect("page in range");
            assert!(view.items.len() <= PAGE_SIZE);
            assert_eq!(view.start, page * PAGE_SIZE);
            assert_eq!(view.total, n);
            reassembled.extend_from_slice(view.items);
        }
        assert_eq!(reassembled, listings, "n = {n}");
    }
}

#[test]
fn out_of_range_page_is_a_no_op() {
    let listings = sample_listings(12);
    assert!(paginate(&listings, 3).is_none());
    assert!(paginate(&listings, 100).is_none());
    // Empty collection still has exactly one (empty) page.
    let empty: Vec<Listing> = Vec::new();
    assert!(paginate(&empty, 0).is_some());
    assert!(paginate(&empty, 1).is_none());
}

#[test]
fn first_page_of_twelve_has_next_only() {
    let actions = nav_actions(0, total_pages(12));
    assert_eq!(actions, vec![Action::ListingsPage(1)]);
}

#[test]
fn last_page_of_twelve_has_previous_only() {
    let listings = sample_listings(12);
    let view = paginate(&listings, 2).expect("page 2 exists");
    assert_eq!(view.items.len(), 2);
    let actions = nav_actions(view.page, view.total_pages);
    assert_eq!(actions, vec![Action::ListingsPage(1)]);
}

#[test]
fn middle_page_has_previous_then_next() {
    let actions = nav_actions(1, 3);
    assert_eq!(
        actions,
        vec![Action::ListingsPage(0), Action::ListingsPage(2)]
    );
}

#[test]
fn single_page_has_no_nav_actions() {
    assert!(nav_actions(0, 1).is_empty());
}

#[test]
fn keyboard_has_one_save_button_per_item_plus_nav_and_refresh() {
    let listings = sample_listings(12);

    // Page 0: 5 item rows, one nav row, one refresh row.
    let view = paginate(&listings, 0).expect("page 0 exists");
    assert_eq!(create_listings_keyboard(&view).len(), 7);

    // Page 2: 2 item rows, one nav row, one refresh row.
    let view = paginate(&listings, 2).expect("page 2 exists");
    assert_eq!(create_listings_keyboard(&view).len(), 4);

    // Single page: no nav row at all.
    let short = sample_listings(3);
    let view = paginate(&short, 0).expect("page 0 exists");
    assert_eq!(create_listings_keyboard(&view).len(), 4);
}

#[test]
fn clip_truncates_long_text_only() {
    assert_eq!(clip("short", 200), "short");
    let long = "x".repeat(250);
    let clipped = clip(&long, 200);
    assert_eq!(clipped.chars().count(), 203);
    assert!(clipped.ends_with("..."));
}

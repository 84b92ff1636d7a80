// src/tests/router_tests/listings_tests.rs

use crate::listings::{ListingSource, EMPTY_MESSAGE, FETCH_ERROR_MESSAGE};
use crate::router::handle;
use crate::tests::utils::{
    body_string, mock_listings, request, CountingSource, FailingSource, FakeSource,
};
use std::time::Duration;

fn get_listings(source: &dyn ListingSource) -> String {
    let mut resp = handle(request("GET", "/listings"), source).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(&mut resp)
}

#[test]
fn renders_one_card_per_listing_in_order() {
    let source = FakeSource::new(mock_listings()).with_delay(Duration::from_millis(50));

    let body = get_listings(&source);

    assert_eq!(body.matches(r#"class="listing-card""#).count(), 6);

    let positions: Vec<usize> = (1..=6)
        .map(|id| {
            body.find(&format!(r#"data-listing-id="{id}""#))
                .unwrap_or_else(|| panic!("card {id} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(!body.contains(EMPTY_MESSAGE));
    assert!(!body.contains(FETCH_ERROR_MESSAGE));
}

#[test]
fn card_shows_formatted_fields() {
    let body = get_listings(&FakeSource::new(mock_listings()));

    assert!(body.contains(r#"id="listing-1""#));
    assert!(body.contains("Tanah Premium Tepi Pantai Cemagi"));
    assert!(body.contains("Cemagi, Mengwi, Badung"));
    assert!(body.contains("Rp\u{a0}3.500.000.000"));
    assert!(body.contains("1000 m²"));
    assert!(body.contains(r#"aria-label="Listing for Kavling View Sawah di Ubud""#));
    assert!(body.contains(r#"loading="lazy""#));

    assert_eq!(body.matches(r#"class="listing-card__status">Dijual<"#).count(), 5);
    assert_eq!(body.matches(r#"class="listing-card__status">Disewakan<"#).count(), 1);
}

#[test]
fn empty_table_shows_empty_message() {
    let body = get_listings(&FakeSource::new(Vec::new()));

    assert!(body.contains(EMPTY_MESSAGE));
    assert!(!body.contains("listing-card"));
}

#[test]
fn failed_fetch_shows_fixed_error_message() {
    let body = get_listings(&FailingSource);

    assert!(body.contains(FETCH_ERROR_MESSAGE));
    assert!(!body.contains("listing-card"));
}

#[test]
fn each_request_fetches_exactly_once() {
    let source = CountingSource::new(mock_listings());

    get_listings(&source);
    assert_eq!(source.calls(), 1);

    get_listings(&source);
    assert_eq!(source.calls(), 2);
}

// src/domain/format.rs

use crate::domain::listing::Listing;

/// Rupiah symbol as the Indonesian locale writes it, followed by a no-break space.
const RUPIAH_PREFIX: &str = "Rp\u{a0}";
const THOUSANDS_SEPARATOR: char = '.';
const SQM_SUFFIX: &str = " m²";

/// Everything a card shows, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    /// Stable render key, the listing id.
    pub key: i64,
    pub status_label: &'static str,
    pub title: String,
    pub location: String,
    pub price: String,
    pub size: String,
    pub image_url: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            key: listing.id,
            status_label: listing.status.label(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            price: format_price(listing.price),
            size: format_size(listing.size_sqm),
            image_url: listing.image_url.clone(),
        }
    }
}

/// `3500000000` -> `"Rp 3.500.000.000"` (no-break space, no decimals).
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    format!("{RUPIAH_PREFIX}{grouped}")
}

/// The area exactly as stored, plus the unit: `1000` -> `"1000 m²"`.
pub fn format_size(size_sqm: f64) -> String {
    format!("{size_sqm}{SQM_SUFFIX}")
}

// src/domain/listing.rs
use serde::Deserialize;
use std::fmt;

/// One land/property row of the listings table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub location: String,
    /// Indonesian Rupiah, whole units.
    pub price: u64,
    pub size_sqm: f64,
    pub status: ListingStatus,
    pub image_url: String,
}

/// Offer type. Anything else coming from the backend is rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ListingStatus {
    /// For sale
    Dijual,
    /// For rent
    Disewakan,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Dijual => "Dijual",
            ListingStatus::Disewakan => "Disewakan",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// src/tests/utils.rs
use crate::domain::listing::{Listing, ListingStatus};
use crate::listings::{FetchError, ListingSource};
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

fn listing(
    id: i64,
    title: &str,
    location: &str,
    price: u64,
    size_sqm: f64,
    status: ListingStatus,
    image_url: &str,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        location: location.to_string(),
        price,
        size_sqm,
        status,
        image_url: image_url.to_string(),
    }
}

/// Six sample rows of the land listings table, in table order.
pub fn mock_listings() -> Vec<Listing> {
    use ListingStatus::{Dijual, Disewakan};

    vec![
        listing(
            1,
            "Tanah Premium Tepi Pantai Cemagi",
            "Cemagi, Mengwi, Badung",
            3_500_000_000,
            1000.0,
            Dijual,
            "https://images.unsplash.com/photo-1517404215738-15263e9f9178?q=80&w=2070&auto=format&fit=crop",
        ),
        listing(
            2,
            "Kavling View Sawah di Ubud",
            "Ubud, Gianyar",
            1_800_000_000,
            800.0,
            Dijual,
            "https://images.unsplash.com/photo-1500382017468-9049fed747ef?q=80&w=1932&auto=format&fit=crop",
        ),
        listing(
            3,
            "Tanah Datar Strategis di Canggu",
            "Canggu, Kuta Utara, Badung",
            2_500_000_000,
            500.0,
            Dijual,
            "https://images.unsplash.com/photo-1542649768-99321a583582?q=80&w=1932&auto=format&fit=crop",
        ),
        listing(
            4,
            "Lahan Luas untuk Villa di Uluwatu",
            "Uluwatu, Kuta Selatan, Badung",
            5_000_000_000,
            2500.0,
            Disewakan,
            "https://images.unsplash.com/photo-1588614959067-aef3a0fea1d4?q=80&w=1974&auto=format&fit=crop",
        ),
        listing(
            5,
            "Tanah Kebun Produktif di Tabanan",
            "Tabanan",
            950_000_000,
            1500.0,
            Dijual,
            "https://images.unsplash.com/photo-1589252331339-1681a8e15478?q=80&w=1968&auto=format&fit=crop",
        ),
        listing(
            6,
            "Pemandangan Gunung Agung, Sidemen",
            "Sidemen, Karangasem",
            1_200_000_000,
            1100.0,
            Dijual,
            "https://images.unsplash.com/photo-1601636182394-4c46f6f2a493?q=80&w=1974&auto=format&fit=crop",
        ),
    ]
}

/// Returns a fixed set of listings, optionally after a simulated network delay.
pub struct FakeSource {
    listings: Vec<Listing>,
    delay: Option<Duration>,
}

impl FakeSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl ListingSource for FakeSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        Ok(self.listings.clone())
    }
}

pub struct FailingSource;

impl ListingSource for FailingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        Err(FetchError::Unavailable)
    }
}

/// Counts how often it gets asked.
pub struct CountingSource {
    inner: FakeSource,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            inner: FakeSource::new(listings),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ListingSource for CountingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_listings()
    }
}

pub fn request(method: &str, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

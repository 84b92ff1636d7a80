// src/listings/view.rs
use crate::domain::Listing;
use crate::listings::ListingSource;

pub const LOADING_MESSAGE: &str = "Memuat listing...";
pub const FETCH_ERROR_MESSAGE: &str = "Gagal memuat data. Silakan coba lagi nanti.";
pub const EMPTY_MESSAGE: &str = "Belum ada listing yang tersedia.";

/// What the content area shows. Everything but `Loading` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Listing>),
}

/// Display state of one page instance.
///
/// `mount` is the only transition out of `Loading` and runs at most once.
/// A fresh instance is the only way back to `Loading`.
#[derive(Debug)]
pub struct ListingsView {
    state: ViewState,
    mounted: bool,
}

impl ListingsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch once and settle into a terminal state. Failures stop here.
    pub fn mount(&mut self, source: &dyn ListingSource) {
        if self.mounted {
            tracing::debug!("listings view already mounted, skipping fetch");
            return;
        }
        self.mounted = true;

        self.state = match source.fetch_listings() {
            Ok(listings) if listings.is_empty() => ViewState::Empty,
            Ok(listings) => ViewState::Populated(listings),
            Err(e) => {
                tracing::warn!(error = %e, "showing listings error state");
                ViewState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
    }
}

impl Default for ListingsView {
    fn default() -> Self {
        Self::new()
    }
}

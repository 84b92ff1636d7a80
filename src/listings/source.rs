// src/listings/source.rs
use crate::config::BackendConfig;
use crate::domain::Listing;
use crate::listings::{BackendError, FetchError};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::collections::HashSet;
use url::Url;

const REST_PREFIX: &str = "rest/v1/";

/// Anything that can hand over the full set of listings in one call.
pub trait ListingSource: Send + Sync {
    // One attempt, one round trip. The order of the result is the backend's.
    fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError>;
}

/// Reads the listings table through the backend's REST interface.
pub struct SupabaseSource {
    client: Client,
    config: BackendConfig,
}

impl SupabaseSource {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(concat!("tanah_bali/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn try_fetch(&self) -> Result<Vec<Listing>, BackendError> {
        if self.config.anon_key.is_empty() {
            return Err(BackendError::Config("SUPABASE_ANON_KEY is not set".into()));
        }
        let endpoint = table_endpoint(&self.config.url, &self.config.table)?;

        tracing::debug!(%endpoint, "fetching listings");

        let resp = self
            .client
            .get(endpoint)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .text()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        decode_listings(&body)
    }
}

impl ListingSource for SupabaseSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        match self.try_fetch() {
            Ok(listings) => {
                tracing::info!(count = listings.len(), table = %self.config.table, "listings fetched");
                Ok(listings)
            }
            Err(e) => {
                tracing::error!(error = %e, table = %self.config.table, "listings fetch failed");
                Err(e.into())
            }
        }
    }
}

/// `{base}/rest/v1/{table}?select=*`
pub fn table_endpoint(base: &str, table: &str) -> Result<Url, BackendError> {
    if base.is_empty() {
        return Err(BackendError::Config("SUPABASE_URL is not set".into()));
    }

    let mut base =
        Url::parse(base).map_err(|e| BackendError::Config(format!("SUPABASE_URL: {e}")))?;

    // Url::join drops the last path segment unless it ends with a slash.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut endpoint = base
        .join(&format!("{REST_PREFIX}{table}"))
        .map_err(|e| BackendError::Config(format!("table {table:?}: {e}")))?;
    endpoint.set_query(Some("select=*"));

    Ok(endpoint)
}

/// Parse a response body and enforce the row rules. One bad row fails the whole set.
pub fn decode_listings(body: &str) -> Result<Vec<Listing>, BackendError> {
    let listings: Vec<Listing> =
        serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(listings.len());
    for listing in &listings {
        if !listing.size_sqm.is_finite() || listing.size_sqm <= 0.0 {
            return Err(BackendError::InvalidRow {
                id: listing.id,
                reason: format!("size_sqm must be positive, got {}", listing.size_sqm),
            });
        }
        if !seen.insert(listing.id) {
            return Err(BackendError::DuplicateId(listing.id));
        }
    }

    Ok(listings)
}

use thiserror::Error;

/// The only failure callers of a `ListingSource` ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("could not retrieve listings")]
    Unavailable,
}

/// Why the backend read went wrong. Logged, never returned past the adapter.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend not configured: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON decode error: {0}")]
    Decode(String),

    #[error("invalid listing {id}: {reason}")]
    InvalidRow { id: i64, reason: String },

    #[error("duplicate listing id {0}")]
    DuplicateId(i64),
}

impl From<BackendError> for FetchError {
    fn from(_: BackendError) -> Self {
        FetchError::Unavailable
    }
}

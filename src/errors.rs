// errors.rs
use thiserror::Error;

/// Errors raised while routing or building a response.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal Server Error")]
    InternalError,
}

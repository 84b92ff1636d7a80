use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Halaman tidak ditemukan.".to_string()),
        ServerError::MethodNotAllowed(method) => (405, format!("Metode {method} tidak didukung.")),
        ServerError::InternalError => (500, "Terjadi kesalahan pada server.".to_string()),
    };

    if status >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, status, "request rejected");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

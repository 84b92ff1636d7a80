use crate::errors::ServerError;
use crate::listings::{ListingSource, ListingsView};
use crate::responses::{html_response, text_response, ResultResp};
use crate::templates::pages::{home_page, listings_content};
use astra::Request;

pub fn handle(req: Request, source: &dyn ListingSource) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(home_page()),
        ("GET", "/listings") => listings_fragment(source),
        ("GET", "/healthz") => text_response("ok"),
        (_, "/" | "/listings" | "/healthz") => {
            Err(ServerError::MethodNotAllowed(method.to_string()))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// One fresh view per request: mount it, render whatever state it settles in.
fn listings_fragment(source: &dyn ListingSource) -> ResultResp {
    let mut view = ListingsView::new();
    view.mount(source);
    html_response(listings_content(view.state()))
}

// templates/pages/home.rs

use crate::listings::ViewState;
use crate::templates::{pages::listings_content, site_layout};
use maud::{html, Markup};

/// Full page. The content area starts out loading and asks for `/listings` once.
pub fn home_page() -> Markup {
    site_layout(
        "Tanah Bali",
        html! {
            h2 { "Temukan Tanah Impian Anda" }
            p {
                "Jelajahi pilihan properti tanah terbaik di seluruh Bali untuk investasi atau hunian pribadi Anda."
            }

            div id="listings" hx-get="/listings" hx-trigger="load" hx-swap="innerHTML" {
                (listings_content(&ViewState::Loading))
            }
        },
    )
}

use maud::{html, Markup};

pub mod error;
pub mod listing_card;

pub use error::error_page;
pub use listing_card::listing_card;

/// Single informational line used by the loading, error and empty states.
pub fn info_state(message: &str) -> Markup {
    html! {
        p class="info-state" { (message) }
    }
}

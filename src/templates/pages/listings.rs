use crate::domain::ListingCard;
use crate::listings::{ViewState, EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::templates::components::{info_state, listing_card};
use maud::{html, Markup};

/// Content area for a given display state.
pub fn listings_content(state: &ViewState) -> Markup {
    match state {
        ViewState::Loading => info_state(LOADING_MESSAGE),
        ViewState::Error(message) => info_state(message),
        ViewState::Empty => info_state(EMPTY_MESSAGE),
        ViewState::Populated(listings) => html! {
            div class="listings-grid" {
                @for listing in listings {
                    (listing_card(&ListingCard::from_listing(listing)))
                }
            }
        },
    }
}

use crate::domain::ListingCard;
use maud::{html, Markup};

pub fn listing_card(card: &ListingCard) -> Markup {
    html! {
        div
            class="listing-card"
            id=(format!("listing-{}", card.key))
            data-listing-id=(card.key)
            aria-label=(format!("Listing for {}", card.title))
        {
            img
                src=(card.image_url)
                alt=(card.title)
                class="listing-card__image"
                loading="lazy";

            div class="listing-card__content" {
                span class="listing-card__status" { (card.status_label) }
                h3 class="listing-card__title" { (card.title) }
                p class="listing-card__location" { (card.location) }
                div class="listing-card__details" {
                    span class="listing-card__price" { (card.price) }
                    span class="listing-card__size" { (card.size) }
                }
            }
        }
    }
}

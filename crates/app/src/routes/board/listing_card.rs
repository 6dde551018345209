use crate::format_helpers::{status_label, status_tone, type_tone};
use client::ListingAction;
use dioxus::prelude::*;
use shared_types::Listing;
use shared_ui::{Badge, Button, ButtonVariant, Card, CardField};

fn action_variant(action: ListingAction) -> ButtonVariant {
    match action {
        ListingAction::Delete => ButtonVariant::Danger,
        ListingAction::Edit => ButtonVariant::Secondary,
        ListingAction::Buy | ListingAction::Offer | ListingAction::Claim => ButtonVariant::Primary,
    }
}

/// One listing with its details, status badge and role actions.
#[component]
pub fn ListingCard(
    listing: Listing,
    actions: Vec<ListingAction>,
    on_action: EventHandler<(ListingAction, Listing)>,
) -> Element {
    let status = status_label(listing.status, listing.claimed_by.as_deref());
    let footer_listing = listing.clone();

    rsx! {
        Card {
            title: listing.title.clone(),
            footer: rsx! {
                for action in actions.iter().copied() {
                    Button {
                        key: "{action.label()}",
                        small: true,
                        variant: action_variant(action),
                        onclick: {
                            let target = footer_listing.clone();
                            move |_: MouseEvent| on_action.call((action, target.clone()))
                        },
                        {action.label()}
                    }
                }
            },
            div { class: "listing-badges",
                Badge { tone: type_tone(listing.listing_type), {listing.listing_type.display_name()} }
                Badge { tone: status_tone(listing.status), "{status}" }
            }
            CardField { label: "Qty", value: listing.quantity.clone() }
            CardField { label: "Available", value: listing.date_label().to_string() }
            CardField { label: "Price", value: listing.price_label() }
            CardField { label: "Farmer", value: listing.farmer_label().to_string() }
        }
    }
}

use super::board::{board_result, use_fetch_failure_notice, BoardFilters, BoardResult, ListingCard, EMPTY_BOARD_MESSAGE};
use super::Route;
use crate::notify;
use crate::session::use_session;
use client::board::load_board;
use client::{ApiClient, BoardQuery, ListingAction, RoleView};
use dioxus::prelude::*;
use shared_types::{Listing, Role};
use shared_ui::{use_toast, CardGrid, EmptyState, PageHeader, SkeletonCards};

#[component]
pub fn BuyerMarket() -> Element {
    rsx! {
        MarketBoard {
            role: Role::Buyer,
            title: "Marketplace",
            subtitle: "Fresh produce for sale or barter.",
        }
    }
}

#[component]
pub fn NgoMarket() -> Element {
    rsx! {
        MarketBoard {
            role: Role::Ngo,
            title: "Available Donations",
            subtitle: "Claim surplus food donated by local farmers.",
        }
    }
}

/// Listing board for the roles that act on other people's listings.
#[component]
fn MarketBoard(role: Role, title: String, subtitle: String) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();
    let query = use_signal(BoardQuery::default);

    let role_view = move || match session.session() {
        Some(current) => RoleView::for_session(&current),
        None => match role {
            Role::Buyer => RoleView::Buyer,
            _ => RoleView::Ngo { username: String::new() },
        },
    };

    let fetch_api = api.clone();
    let mut listings = use_resource(move || {
        let api = fetch_api.clone();
        let view = role_view();
        let query = query.read().clone();
        async move { load_board(&api, &view, &query).await }
    });
    use_fetch_failure_notice(listings);

    let on_action = move |(action, listing): (ListingAction, Listing)| match action {
        ListingAction::Buy => {
            navigator().push(Route::Payment { id: listing.id });
        }
        ListingAction::Offer => notify::info(&toast, notify::offer_notice(listing.farmer_label())),
        ListingAction::Claim => {
            let api = api.clone();
            let ngo = session.username();
            spawn(async move {
                match api.claim_listing(listing.id, &ngo).await {
                    Ok(_) => {
                        notify::success(&toast, notify::claim_notice(listing.farmer_label()));
                        listings.restart();
                    }
                    Err(e) => notify::failure(&toast, "claim donation", &e),
                }
            });
        }
        other => tracing::debug!(?other, ?role, "Action not offered on the market board"),
    };

    let view = role_view();
    let fetched = listings.read().clone();
    let body = match board_result(fetched.as_ref()) {
        BoardResult::Loading => rsx! { SkeletonCards {} },
        BoardResult::Ready(shown) if !shown.is_empty() => rsx! {
            CardGrid {
                for listing in shown.iter() {
                    ListingCard {
                        key: "{listing.id}",
                        listing: listing.clone(),
                        actions: view.actions(listing),
                        on_action: on_action.clone(),
                    }
                }
            }
        },
        BoardResult::Ready(_) | BoardResult::Failed => rsx! { EmptyState { message: EMPTY_BOARD_MESSAGE.to_string() } },
    };

    rsx! {
        PageHeader { title, subtitle }
        BoardFilters { query }
        {body}
    }
}

mod form_sheet;

use super::board::{board_result, use_fetch_failure_notice, BoardFilters, BoardResult, ListingCard, EMPTY_BOARD_MESSAGE};
use crate::notify;
use crate::session::use_session;
use client::board::{group_for_farmer, load_board};
use client::{ApiClient, BoardQuery, ListingAction, RoleView};
use dioxus::prelude::*;
use form_sheet::{FormMode, ListingFormSheet};
use shared_types::Listing;
use shared_ui::{
    use_toast, Button, CardGrid, ConfirmDialog, EmptyState, PageHeader, Section, SkeletonCards,
};

/// The farmer's own listings grouped by type, with create, edit and delete.
#[component]
pub fn FarmerDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let query = use_signal(BoardQuery::default);
    let mut sheet = use_signal(|| Option::<(FormMode, Option<Listing>)>::None);
    let mut sheet_generation = use_signal(|| 0u32);
    let mut pending_delete = use_signal(|| Option::<Listing>::None);
    let mut confirm_open = use_signal(|| false);

    let farmer_view = move || RoleView::Farmer {
        username: session.username(),
    };

    let fetch_api = api.clone();
    let mut listings = use_resource(move || {
        let api = fetch_api.clone();
        let view = farmer_view();
        let query = query.read().clone();
        async move { load_board(&api, &view, &query).await }
    });
    use_fetch_failure_notice(listings);

    let mut open_sheet = move |mode: FormMode, initial: Option<Listing>| {
        let next = *sheet_generation.peek() + 1;
        sheet_generation.set(next);
        sheet.set(Some((mode, initial)));
    };

    let on_action = move |(action, listing): (ListingAction, Listing)| match action {
        ListingAction::Edit => open_sheet(FormMode::Edit, Some(listing)),
        ListingAction::Delete => {
            pending_delete.set(Some(listing));
            confirm_open.set(true);
        }
        other => tracing::debug!(?other, "Action not offered to farmers"),
    };

    let confirm_delete = move |_: ()| {
        let Some(target) = pending_delete.take() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_listing(target.id).await {
                Ok(_) => {
                    notify::success(&toast, "Listing deleted!");
                    listings.restart();
                }
                Err(e) => notify::failure(&toast, "delete listing", &e),
            }
        });
    };

    let view = farmer_view();
    let fetched = listings.read().clone();
    let result = board_result(fetched.as_ref());
    let body = match result {
        BoardResult::Loading => rsx! { SkeletonCards {} },
        BoardResult::Failed => rsx! { EmptyState { message: EMPTY_BOARD_MESSAGE.to_string() } },
        BoardResult::Ready(shown) => {
            let groups = group_for_farmer(shown);
            if groups.is_empty() {
                rsx! { EmptyState { message: EMPTY_BOARD_MESSAGE.to_string() } }
            } else {
                rsx! {
                    ListingSection { title: "Sell", listings: groups.sell, view: view.clone(), on_action }
                    ListingSection { title: "Barter", listings: groups.barter, view: view.clone(), on_action }
                    ListingSection { title: "Donations (available)", listings: groups.donate_available, view: view.clone(), on_action }
                    ListingSection { title: "Donations (claimed)", listings: groups.donate_claimed, view: view.clone(), on_action }
                }
            }
        }
    };

    rsx! {
        PageHeader {
            title: "My Listings",
            subtitle: "Manage the crops you sell, barter and donate.",
            Button {
                onclick: move |_: MouseEvent| open_sheet(FormMode::Create, None),
                "Add Listing"
            }
        }

        BoardFilters { query }

        {body}

        if let Some((mode, initial)) = sheet() {
            ListingFormSheet {
                key: "{sheet_generation}",
                mode,
                initial,
                on_close: move |_| sheet.set(None),
                on_saved: move |_| listings.restart(),
            }
        }

        ConfirmDialog {
            open: confirm_open(),
            on_open_change: move |open: bool| confirm_open.set(open),
            on_confirm: confirm_delete,
            title: "Delete listing",
            description: "Delete this listing?",
            confirm_label: "Delete",
        }
    }
}

/// One titled group of the dashboard. Hidden when empty.
#[component]
fn ListingSection(
    title: String,
    listings: Vec<Listing>,
    view: RoleView,
    on_action: EventHandler<(ListingAction, Listing)>,
) -> Element {
    if listings.is_empty() {
        return rsx! {};
    }
    let heading = format!("{title} ({})", listings.len());
    rsx! {
        Section { title: heading,
            CardGrid {
                for listing in listings.iter() {
                    ListingCard {
                        key: "{listing.id}",
                        listing: listing.clone(),
                        actions: view.actions(listing),
                        on_action,
                    }
                }
            }
        }
    }
}

use super::Route;
use crate::notify;
use client::payment::{find_listing, OrderSummary, LISTING_NOT_FOUND_NOTICE};
use client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{use_toast, Button, ButtonVariant, Card, CardField, EmptyState, FormActions, PageHeader, SkeletonCards};

/// Order summary for one sell listing, reached from the buyer's "Buy" button.
#[component]
pub fn Payment(id: i64) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let order = use_resource(move || {
        let api = api.clone();
        async move {
            let listings = api.list_listings().await.map_err(|e| {
                tracing::error!(error = %e, listing_id = id, "Failed to load listing for payment");
                e
            })?;
            Ok::<_, shared_types::AppError>(find_listing(&listings, id).map(OrderSummary::from_listing))
        }
    });

    let body = match &*order.read() {
        None => rsx! { SkeletonCards { count: 1 } },
        Some(Ok(Some(summary))) => {
            let summary = summary.clone();
            let seller = format!("Sold by {}", summary.farmer);
            rsx! {
                Card {
                    title: summary.title.clone(),
                    subtitle: seller,
                    footer: rsx! {
                        FormActions {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_: MouseEvent| {
                                    navigator().push(Route::BuyerMarket {});
                                },
                                "Back"
                            }
                            Button {
                                onclick: move |_: MouseEvent| {
                                    notify::success(&toast, format!("Payment confirmed for {}", summary.title));
                                    navigator().push(Route::BuyerMarket {});
                                },
                                "Confirm Payment"
                            }
                        }
                    },
                    CardField { label: "Unit price", value: summary.unit_price_label() }
                    CardField { label: "Quantity", value: summary.quantity.clone() }
                    CardField { label: "Total", value: summary.total_label() }
                }
            }
        }
        Some(Ok(None)) => rsx! {
            EmptyState { message: LISTING_NOT_FOUND_NOTICE.to_string(),
                Link { to: Route::BuyerMarket {}, "Back to marketplace" }
            }
        },
        Some(Err(e)) => rsx! {
            EmptyState { message: e.notice("load listing"),
                Link { to: Route::BuyerMarket {}, "Back to marketplace" }
            }
        },
    };

    rsx! {
        PageHeader { title: "Payment" }
        {body}
    }
}

use client::board::{group_for_farmer, load_board};
use client::listing_form::ListingForm;
use client::{BoardQuery, ListingAction, RoleView, SortOrder, TypeFilter};
use pretty_assertions::assert_eq;
use shared_types::{ListingStatus, ListingType};

use crate::common;

fn tomatoes() -> ListingForm {
    ListingForm {
        title: "Tomatoes".into(),
        quantity: "10".into(),
        listing_type: "sell".into(),
        available_date: "2024-01-01".into(),
        price: "50".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_created_listing_reaches_buyer_board_until_deleted() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;

    let draft = tomatoes().to_draft(&farmer).expect("valid draft");
    let ack = api.create_listing(&draft).await.expect("create");
    let id = ack.id.expect("server returns the new id");

    let buyer_board = BoardQuery::default().apply(&RoleView::Buyer, api.list_listings().await.unwrap());
    assert_eq!(buyer_board.len(), 1);
    let listing = &buyer_board[0];
    assert_eq!(listing.title, "Tomatoes");
    assert_eq!(listing.price_label(), "$50.00");
    assert_eq!(listing.farmer_label(), "alice");
    assert_eq!(RoleView::Buyer.actions(listing), vec![ListingAction::Buy]);

    api.delete_listing(id).await.expect("delete");
    let after = BoardQuery::default().apply(&RoleView::Buyer, api.list_listings().await.unwrap());
    assert!(after.is_empty());
}

#[tokio::test]
async fn test_fair_price_is_sent_for_sell_listing() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;

    let form = ListingForm {
        price: String::new(),
        wholesale_price: "100".into(),
        retail_price: "200".into(),
        ..tomatoes()
    };
    api.create_listing(&form.to_draft(&farmer).unwrap()).await.expect("create");

    let listings = api.list_listings().await.unwrap();
    assert_eq!(listings[0].price, Some(150.0));
}

#[tokio::test]
async fn test_non_sell_listing_is_stored_without_price() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;

    let form = ListingForm {
        listing_type: "barter".into(),
        ..tomatoes()
    };
    api.create_listing(&form.to_draft(&farmer).unwrap()).await.expect("create");

    let listings = api.list_listings().await.unwrap();
    assert_eq!(listings[0].listing_type, ListingType::Barter);
    assert_eq!(listings[0].price, None);
    assert_eq!(listings[0].price_label(), "N/A");
}

#[tokio::test]
async fn test_edit_round_trips_through_the_form() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;
    let id = api
        .create_listing(&tomatoes().to_draft(&farmer).unwrap())
        .await
        .unwrap()
        .id
        .unwrap();

    let stored = api.list_listings().await.unwrap().remove(0);
    let mut form = ListingForm::from_listing(&stored);
    assert_eq!(form.price, "50.00");
    form.quantity = "25".into();
    api.update_listing(id, &form.to_draft(&farmer).unwrap())
        .await
        .expect("update");

    let updated = api.list_listings().await.unwrap().remove(0);
    assert_eq!(updated.quantity, "25");
    assert_eq!(updated.status, ListingStatus::Available);
}

#[tokio::test]
async fn test_farmer_board_shows_only_own_listings_grouped() {
    let (api, _state) = common::spawn_api().await;
    let alice = common::signed_in(&api, "alice", "farmer").await;
    let bob = common::signed_in(&api, "bob", "farmer").await;

    for (session, title, kind) in [
        (&alice, "Tomatoes", "sell"),
        (&alice, "Rice", "donate"),
        (&alice, "Maize", "barter"),
        (&bob, "Onions", "sell"),
    ] {
        let form = ListingForm {
            title: title.into(),
            listing_type: kind.into(),
            ..tomatoes()
        };
        api.create_listing(&form.to_draft(session).unwrap()).await.unwrap();
    }

    let view = RoleView::for_session(&alice);
    let shown = BoardQuery::default().apply(&view, api.list_listings().await.unwrap());
    let groups = group_for_farmer(shown);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups.sell[0].title, "Tomatoes");
    assert_eq!(groups.barter[0].title, "Maize");
    assert_eq!(groups.donate_available[0].title, "Rice");
    assert!(groups.donate_claimed.is_empty());
}

#[tokio::test]
async fn test_buyer_search_and_price_sort() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;
    for (title, price) in [("Red Tomatoes", "30"), ("Potatoes", "10"), ("Cherry tomatoes", "20")] {
        let form = ListingForm {
            title: title.into(),
            price: price.into(),
            ..tomatoes()
        };
        api.create_listing(&form.to_draft(&farmer).unwrap()).await.unwrap();
    }

    let query = BoardQuery {
        search: "TOMATO".into(),
        sort: SortOrder::PriceAsc,
        ..Default::default()
    };
    let shown = query.apply(&RoleView::Buyer, api.list_listings().await.unwrap());

    let titles: Vec<&str> = shown.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Cherry tomatoes", "Red Tomatoes"]);
}

#[tokio::test]
async fn test_changing_the_query_loads_fresh_listings() {
    let (api, _state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;
    api.create_listing(&tomatoes().to_draft(&farmer).unwrap()).await.unwrap();

    let first = load_board(&api, &RoleView::Buyer, &BoardQuery::default()).await.unwrap();
    assert_eq!(first.len(), 1);

    let beans = ListingForm {
        title: "Green Beans".into(),
        listing_type: "barter".into(),
        price: String::new(),
        ..tomatoes()
    };
    api.create_listing(&beans.to_draft(&farmer).unwrap()).await.unwrap();

    let query = BoardQuery {
        search: "green".into(),
        ..Default::default()
    };
    let searched = load_board(&api, &RoleView::Buyer, &query).await.unwrap();
    let titles: Vec<&str> = searched.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Green Beans"]);
}

#[tokio::test]
async fn test_board_load_recovers_after_a_failed_fetch() {
    let (api, state) = common::spawn_api().await;
    let farmer = common::signed_in(&api, "alice", "farmer").await;
    api.create_listing(&tomatoes().to_draft(&farmer).unwrap()).await.unwrap();

    state.lock().unwrap().listings_down = true;
    let err = load_board(&api, &RoleView::Buyer, &BoardQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.notice("fetch listings"), "DB connection failed");

    state.lock().unwrap().listings_down = false;
    let query = BoardQuery {
        type_filter: TypeFilter::from_key("sell"),
        ..Default::default()
    };
    let shown = load_board(&api, &RoleView::Buyer, &query).await.unwrap();
    assert_eq!(shown.len(), 1);
}

#[tokio::test]
async fn test_deleting_unknown_listing_reports_not_found() {
    let (api, _state) = common::spawn_api().await;

    let err = api.delete_listing(999).await.unwrap_err();

    assert_eq!(err.notice("delete listing"), "Listing not found");
}

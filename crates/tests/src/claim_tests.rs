use client::board::group_for_farmer;
use client::listing_form::ListingForm;
use client::{BoardQuery, ListingAction, RoleView};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ListingStatus};

use crate::common;

async fn donate_rice(api: &client::ApiClient) -> i64 {
    let farmer = common::signed_in(api, "alice", "farmer").await;
    let form = ListingForm {
        title: "Rice".into(),
        quantity: "40".into(),
        listing_type: "donate".into(),
        available_date: "2024-02-10".into(),
        ..Default::default()
    };
    api.create_listing(&form.to_draft(&farmer).unwrap())
        .await
        .unwrap()
        .id
        .unwrap()
}

#[tokio::test]
async fn test_claim_moves_donation_from_ngo_board_to_farmer_claimed_group() {
    let (api, _state) = common::spawn_api().await;
    let id = donate_rice(&api).await;
    let ngo = common::signed_in(&api, "helpers", "ngo").await;
    let ngo_view = RoleView::for_session(&ngo);

    let before = BoardQuery::default().apply(&ngo_view, api.list_listings().await.unwrap());
    assert_eq!(before.len(), 1);
    assert_eq!(ngo_view.actions(&before[0]), vec![ListingAction::Claim]);

    api.claim_listing(id, &ngo.username).await.expect("claim");

    let listings = api.list_listings().await.unwrap();
    assert!(BoardQuery::default().apply(&ngo_view, listings.clone()).is_empty());

    let farmer_view = RoleView::Farmer {
        username: "alice".into(),
    };
    let groups = group_for_farmer(BoardQuery::default().apply(&farmer_view, listings));
    assert_eq!(groups.donate_claimed.len(), 1);
    let claimed = &groups.donate_claimed[0];
    assert_eq!(claimed.status, ListingStatus::Claimed);
    assert_eq!(claimed.claimed_by.as_deref(), Some("helpers"));
}

#[tokio::test]
async fn test_second_claim_loses_with_server_message() {
    let (api, _state) = common::spawn_api().await;
    let id = donate_rice(&api).await;

    api.claim_listing(id, "first").await.expect("first claim");
    let err = api.claim_listing(id, "second").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.notice("claim donation"), "Listing already claimed");
}

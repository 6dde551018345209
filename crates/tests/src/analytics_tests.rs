use client::analytics::{charts, summary_text};
use client::listing_form::ListingForm;
use pretty_assertions::assert_eq;
use shared_types::{AnalyticsSummary, Role};

use crate::common;

async fn seed(api: &client::ApiClient) {
    let farmer = common::signed_in(api, "alice", "farmer").await;
    for (title, qty, kind, date, price) in [
        ("Tomatoes", "10", "sell", "2024-01-05", "5"),
        ("Onions", "4", "sell", "2024-02-01", "2.5"),
        ("Maize", "8", "barter", "2024-02-03", ""),
        ("Rice", "20", "donate", "2024-03-01", ""),
    ] {
        let form = ListingForm {
            title: title.into(),
            quantity: qty.into(),
            listing_type: kind.into(),
            available_date: date.into(),
            price: price.into(),
            ..Default::default()
        };
        api.create_listing(&form.to_draft(&farmer).unwrap()).await.unwrap();
    }
}

#[tokio::test]
async fn test_farmer_analytics_summary_and_series() {
    let (api, _state) = common::spawn_api().await;
    seed(&api).await;

    let summary = api.analytics(Role::Farmer, "alice").await.expect("analytics");

    let AnalyticsSummary::Farmer(ref farmer) = summary else {
        panic!("expected farmer analytics");
    };
    assert_eq!(farmer.sell_count, 2);
    assert_eq!(farmer.barter_count, 1);
    assert_eq!(farmer.donate_count, 1);
    assert_eq!(
        farmer.monthly_data.keys().cloned().collect::<Vec<_>>(),
        vec!["2024-01".to_string(), "2024-02".to_string()]
    );
    assert_eq!(summary_text(&summary), "You sold 14.0 kg crops and earned Rs. 60.00 total.");

    let drawn = charts(&summary);
    assert_eq!(drawn.primary.data[0]["type"], "pie");
}

#[tokio::test]
async fn test_buyer_analytics_counts_available_crops() {
    let (api, _state) = common::spawn_api().await;
    seed(&api).await;

    let summary = api.analytics(Role::Buyer, "bob").await.expect("analytics");

    let AnalyticsSummary::Buyer(ref buyer) = summary else {
        panic!("expected buyer analytics");
    };
    assert_eq!(buyer.total_listings, 3);
    assert_eq!(buyer.crop_types.get("Maize"), Some(&1));
    assert_eq!(summary_text(&summary), "3 listings available. Average savings: Rs. 12.50 per item.");
}

#[tokio::test]
async fn test_ngo_analytics_after_claim() {
    let (api, _state) = common::spawn_api().await;
    seed(&api).await;
    let rice = api
        .list_listings()
        .await
        .unwrap()
        .into_iter()
        .find(|l| l.title == "Rice")
        .unwrap();
    api.claim_listing(rice.id, "helpers").await.unwrap();

    let summary = api.analytics(Role::Ngo, "helpers").await.expect("analytics");

    assert_eq!(
        summary_text(&summary),
        "You received 20.0 kg of donated food (1 donations). 0 available now."
    );
}

#[tokio::test]
async fn test_username_is_percent_encoded_in_path() {
    let (api, _state) = common::spawn_api().await;

    let summary = api.analytics(Role::Ngo, "food bank/east").await.expect("analytics");

    let AnalyticsSummary::Ngo(ngo) = summary else {
        panic!("expected ngo analytics");
    };
    assert_eq!(ngo.claimed_count, 0);
}

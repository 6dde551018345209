//! Order summary for the buyer payment page.

use shared_types::{Listing, ListingType};

pub const LISTING_NOT_FOUND_NOTICE: &str = "Listing not found";

/// What the payment page shows for one sell listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub listing_id: i64,
    pub title: String,
    pub farmer: String,
    pub quantity: String,
    pub unit_price: Option<f64>,
    /// `unit_price × quantity` when both are numeric.
    pub total: Option<f64>,
}

impl OrderSummary {
    pub fn from_listing(listing: &Listing) -> Self {
        let unit_price = listing.price.filter(|p| *p > 0.0);
        let total = match (unit_price, listing.quantity_value()) {
            (Some(p), Some(q)) => Some((p * q * 100.0).round() / 100.0),
            _ => None,
        };
        Self {
            listing_id: listing.id,
            title: listing.title.clone(),
            farmer: listing.farmer_label().to_string(),
            quantity: listing.quantity.clone(),
            unit_price,
            total,
        }
    }

    pub fn unit_price_label(&self) -> String {
        money_label(self.unit_price)
    }

    pub fn total_label(&self) -> String {
        money_label(self.total)
    }
}

fn money_label(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("${a:.2}"),
        None => "N/A".to_string(),
    }
}

/// Find a purchasable listing by id among freshly fetched listings.
pub fn find_listing(listings: &[Listing], id: i64) -> Option<&Listing> {
    listings
        .iter()
        .find(|l| l.id == id && l.listing_type == ListingType::Sell && l.is_available())
}

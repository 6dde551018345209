use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One month of farmer sales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MonthlyEarnings {
    #[serde(default)]
    pub earnings: f64,
}

/// `GET /analytics/farmer/{username}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FarmerAnalytics {
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub sell_count: u64,
    #[serde(default)]
    pub barter_count: u64,
    #[serde(default)]
    pub donate_count: u64,
    /// Keyed by `YYYY-MM`.
    #[serde(default)]
    pub monthly_data: BTreeMap<String, MonthlyEarnings>,
}

/// `GET /analytics/buyer/{username}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BuyerAnalytics {
    #[serde(default)]
    pub total_listings: u64,
    #[serde(default)]
    pub avg_savings_per_item: f64,
    /// Crop title → number of available listings.
    #[serde(default)]
    pub crop_types: BTreeMap<String, u64>,
}

/// `GET /analytics/ngo/{username}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NgoAnalytics {
    #[serde(default)]
    pub total_claimed_quantity: f64,
    #[serde(default)]
    pub claimed_count: u64,
    #[serde(default)]
    pub available_count: u64,
    /// Keyed by `YYYY-MM`, value is claimed quantity in kg.
    #[serde(default)]
    pub monthly_claims: BTreeMap<String, f64>,
}

/// A role-specific analytics aggregate.
///
/// The wire object carries no discriminator; the role that was requested
/// decides which variant the body decodes into.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsSummary {
    Farmer(FarmerAnalytics),
    Buyer(BuyerAnalytics),
    Ngo(NgoAnalytics),
}

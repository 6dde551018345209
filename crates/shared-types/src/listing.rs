use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a listing is offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sell,
    Barter,
    Donate,
}

pub const ALL_LISTING_TYPES: &[ListingType] =
    &[ListingType::Sell, ListingType::Barter, ListingType::Donate];

impl ListingType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sell" => Some(ListingType::Sell),
            "barter" => Some(ListingType::Barter),
            "donate" => Some(ListingType::Donate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sell => "sell",
            ListingType::Barter => "barter",
            ListingType::Donate => "donate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ListingType::Sell => "Sell",
            ListingType::Barter => "Barter",
            ListingType::Donate => "Donate",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim state of a listing. Only donations ever leave `Available`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Available,
    Claimed,
}

pub const ALL_LISTING_STATUSES: &[ListingStatus] =
    &[ListingStatus::Available, ListingStatus::Claimed];

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Claimed => "claimed",
        }
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A crop offer as returned by `GET /listings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    #[serde(deserialize_with = "de_quantity")]
    pub quantity: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub farmer_id: String,
    #[serde(default)]
    pub farmer_name: Option<String>,
    #[serde(default)]
    pub available_date: Option<String>,
    #[serde(default, deserialize_with = "de_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub claimed_by: Option<String>,
}

impl Listing {
    /// Price used for ordering; an absent price counts as zero.
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Parsed availability date, if the server sent one we understand.
    pub fn available_on(&self) -> Option<NaiveDate> {
        self.available_date.as_deref().and_then(parse_listing_date)
    }

    /// Quantity as a number when the free-form field holds one.
    pub fn quantity_value(&self) -> Option<f64> {
        self.quantity.trim().parse::<f64>().ok().filter(|q| q.is_finite())
    }

    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }

    /// Price formatted for display: `$12.50` or `N/A`.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(p) if p > 0.0 => format!("${:.2}", p),
            _ => "N/A".to_string(),
        }
    }

    pub fn farmer_label(&self) -> &str {
        match self.farmer_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    pub fn date_label(&self) -> &str {
        match self.available_date.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "Not specified",
        }
    }
}

/// Parse the date formats the listing API is known to emit:
/// `2024-01-01`, RFC 3339, and RFC 2822 (`Mon, 01 Jan 2024 00:00:00 GMT`).
pub fn parse_listing_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    // Mismatched weekdays fail rfc2822; retry on the day-month-year tail.
    s.split_once(", ")
        .and_then(|(_, rest)| NaiveDate::parse_from_str(rest.get(..11)?, "%d %b %Y").ok())
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /listings` and `PUT /listings/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub quantity: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub farmer_id: String,
    pub farmer_name: String,
    pub available_date: String,
    pub price: Option<f64>,
}

/// Body for `POST /claim/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimRequest {
    pub claimed_by: String,
}

// ---------------------------------------------------------------------------
// Lenient decoders
// ---------------------------------------------------------------------------

fn de_quantity<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "quantity must be a string or number, got {other}"
        ))),
    }
}

fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Ok(n.as_f64()),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|v| Some(v).filter(|v| v.is_finite()))
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s}"))),
        other => Err(serde::de::Error::custom(format!(
            "price must be a number, got {other}"
        ))),
    }
}

//! Create/edit form state for a farmer's listing.
//!
//! Inputs stay as raw strings so the form can be bound directly to text
//! fields; [`ListingForm::to_draft`] validates them and produces the wire
//! payload.

use shared_types::{AppError, Listing, ListingDraft, ListingType, Session};
use std::collections::HashMap;

/// Raw form fields as typed by the farmer.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub quantity: String,
    /// Lowercase type key from the select (`sell`, `barter`, `donate`).
    pub listing_type: String,
    pub available_date: String,
    /// Price entered directly. Wins over the wholesale/retail pair.
    pub price: String,
    pub wholesale_price: String,
    pub retail_price: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            quantity: String::new(),
            listing_type: ListingType::Sell.as_str().to_string(),
            available_date: String::new(),
            price: String::new(),
            wholesale_price: String::new(),
            retail_price: String::new(),
        }
    }
}

impl ListingForm {
    /// Pre-fill the edit form from an existing listing.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            quantity: listing.quantity.clone(),
            listing_type: listing.listing_type.as_str().to_string(),
            available_date: listing
                .available_on()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            price: listing.price.map(|p| format!("{p:.2}")).unwrap_or_default(),
            wholesale_price: String::new(),
            retail_price: String::new(),
        }
    }

    pub fn is_sell(&self) -> bool {
        ListingType::parse(&self.listing_type) == Some(ListingType::Sell)
    }

    /// Validate and build the create/update payload owned by `session`.
    pub fn to_draft(&self, session: &Session) -> Result<ListingDraft, AppError> {
        let mut field_errors: HashMap<String, String> = HashMap::new();

        let title = self.title.trim();
        if title.is_empty() {
            field_errors.insert("title".into(), "Crop name is required".into());
        }
        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            field_errors.insert("quantity".into(), "Quantity is required".into());
        }
        let available_date = self.available_date.trim();
        if available_date.is_empty() {
            field_errors.insert("available_date".into(), "Available date is required".into());
        }
        let listing_type = ListingType::parse(&self.listing_type);
        if listing_type.is_none() {
            field_errors.insert("type".into(), "Choose sell, barter, or donate".into());
        }

        let price = match listing_type {
            Some(ListingType::Sell) => match self.resolve_price() {
                Ok(p) => Some(p),
                Err((field, msg)) => {
                    field_errors.insert(field.into(), msg);
                    None
                }
            },
            _ => None,
        };

        if !field_errors.is_empty() {
            return Err(AppError::validation(
                "Please enter all required fields",
                field_errors,
            ));
        }
        let listing_type = listing_type
            .ok_or_else(|| AppError::field("type", "Choose sell, barter, or donate"))?;

        Ok(ListingDraft {
            title: title.to_string(),
            quantity: quantity.to_string(),
            listing_type,
            farmer_id: session.username.clone(),
            farmer_name: session.username.clone(),
            available_date: available_date.to_string(),
            price,
        })
    }

    /// Price for a sell listing: the direct entry when present, otherwise
    /// the fair price of the wholesale/retail pair.
    fn resolve_price(&self) -> Result<f64, (&'static str, String)> {
        let direct = self.price.trim();
        if !direct.is_empty() {
            return match parse_amount(direct) {
                Some(p) if p > 0.0 => Ok(p),
                _ => Err(("price", "Price must be a positive number".into())),
            };
        }
        let wholesale = self.wholesale_price.trim();
        let retail = self.retail_price.trim();
        if wholesale.is_empty() && retail.is_empty() {
            return Err(("price", "Sell listings need a price".into()));
        }
        let wholesale = parse_amount(wholesale)
            .ok_or(("wholesale_price", "Wholesale price must be a number".to_string()))?;
        let retail =
            parse_amount(retail).ok_or(("retail_price", "Retail price must be a number".to_string()))?;
        fair_price(wholesale, retail).map_err(|msg| ("retail_price", msg))
    }
}

/// Mean of wholesale and retail, rounded to cents.
///
/// Both must be positive and retail must exceed wholesale.
pub fn fair_price(wholesale: f64, retail: f64) -> Result<f64, String> {
    if wholesale <= 0.0 || retail <= 0.0 {
        return Err("Prices must be positive".into());
    }
    if retail <= wholesale {
        return Err("Retail price must exceed wholesale price".into());
    }
    Ok(((wholesale + retail) / 2.0 * 100.0).round() / 100.0)
}

fn parse_amount(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

//! Listing board pieces shared by the farmer dashboard and the buyer/NGO
//! markets: the filter bar and the listing card.

mod filters;
mod listing_card;

pub use filters::BoardFilters;
pub use listing_card::ListingCard;

use dioxus::prelude::*;
use shared_types::{AppError, Listing};

/// Board state after the latest load.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardResult {
    Loading,
    Ready(Vec<Listing>),
    Failed,
}

pub fn board_result(loaded: Option<&Result<Vec<Listing>, AppError>>) -> BoardResult {
    match loaded {
        None => BoardResult::Loading,
        Some(Ok(listings)) => BoardResult::Ready(listings.clone()),
        Some(Err(_)) => BoardResult::Failed,
    }
}

pub const FETCH_ACTION: &str = "fetch listings";
pub const EMPTY_BOARD_MESSAGE: &str = "No listings available.";

/// Logs and toasts a failed listings fetch when a new fetch result arrives.
pub fn use_fetch_failure_notice(fetched: Resource<Result<Vec<Listing>, AppError>>) {
    let toasts = shared_ui::use_toast();
    use_effect(move || {
        if let Some(Err(e)) = &*fetched.read() {
            crate::notify::failure(&toasts, FETCH_ACTION, e);
        }
    });
}

//! Shared display mappings for listing cards.

use shared_types::{ListingStatus, ListingType};
use shared_ui::BadgeTone;

/// Badge colour for a listing type: sell green, barter amber, donate blue.
pub fn type_tone(listing_type: ListingType) -> BadgeTone {
    match listing_type {
        ListingType::Sell => BadgeTone::Green,
        ListingType::Barter => BadgeTone::Amber,
        ListingType::Donate => BadgeTone::Blue,
    }
}

pub fn status_tone(status: ListingStatus) -> BadgeTone {
    match status {
        ListingStatus::Available => BadgeTone::Green,
        ListingStatus::Claimed => BadgeTone::Neutral,
    }
}

/// Status badge text, naming the claimant when there is one.
pub fn status_label(status: ListingStatus, claimed_by: Option<&str>) -> String {
    match (status, claimed_by) {
        (ListingStatus::Claimed, Some(ngo)) if !ngo.is_empty() => format!("claimed by {ngo}"),
        _ => status.as_str().to_string(),
    }
}

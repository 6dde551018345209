//! Listing board pipeline: fetch, then role visibility, search, type
//! filter and sort.
//!
//! Apart from [`load_board`] everything here is pure. The app calls
//! [`load_board`] again on every change to the search box or dropdowns.

use crate::api::ApiClient;
use crate::role_view::RoleView;
use shared_types::{AppError, Listing, ListingStatus, ListingType};
use std::cmp::Ordering;

/// Board ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the server order.
    #[default]
    Unsorted,
    /// Newest `available_date` first.
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Map a dropdown key to an order. Unknown keys leave the order alone.
    pub fn from_key(key: &str) -> Self {
        match key {
            "new" => SortOrder::Newest,
            "priceAsc" => SortOrder::PriceAsc,
            "priceDesc" => SortOrder::PriceDesc,
            _ => SortOrder::Unsorted,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Unsorted => "",
            SortOrder::Newest => "new",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
        }
    }
}

/// Type dropdown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ListingType),
}

impl TypeFilter {
    pub fn from_key(key: &str) -> Self {
        ListingType::parse(key)
            .map(TypeFilter::Only)
            .unwrap_or(TypeFilter::All)
    }

    pub fn key(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => listing.listing_type == *t,
        }
    }
}

/// User-controlled board filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardQuery {
    pub search: String,
    pub type_filter: TypeFilter,
    pub sort: SortOrder,
}

impl BoardQuery {
    /// Run the full pipeline over freshly fetched listings.
    pub fn apply(&self, view: &RoleView, listings: Vec<Listing>) -> Vec<Listing> {
        let visible = view.visible(listings);
        let searched = search(visible, &self.search);
        let filtered = filter_by_type(searched, self.type_filter);
        sort_listings(filtered, self.sort)
    }
}

/// Fetch every listing and run `query` over it for `view`.
pub async fn load_board(api: &ApiClient, view: &RoleView, query: &BoardQuery) -> Result<Vec<Listing>, AppError> {
    let listings = api.list_listings().await?;
    let shown = query.apply(view, listings);
    tracing::debug!(shown = shown.len(), ?query, "Board loaded");
    Ok(shown)
}

/// Case-insensitive substring match on the raw term. An empty term keeps all.
pub fn search(listings: Vec<Listing>, term: &str) -> Vec<Listing> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return listings;
    }
    listings
        .into_iter()
        .filter(|l| l.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_by_type(listings: Vec<Listing>, filter: TypeFilter) -> Vec<Listing> {
    listings.into_iter().filter(|l| filter.matches(l)).collect()
}

/// Stable sort. Absent prices compare as zero; missing or unparseable
/// dates compare as oldest.
pub fn sort_listings(mut listings: Vec<Listing>, order: SortOrder) -> Vec<Listing> {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Newest => listings.sort_by(|a, b| b.available_on().cmp(&a.available_on())),
        SortOrder::PriceAsc => listings.sort_by(|a, b| compare_price(a, b)),
        SortOrder::PriceDesc => listings.sort_by(|a, b| compare_price(b, a)),
    }
    listings
}

fn compare_price(a: &Listing, b: &Listing) -> Ordering {
    a.sort_price().total_cmp(&b.sort_price())
}

/// A farmer's own listings split into the four dashboard sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmerGroups {
    pub sell: Vec<Listing>,
    pub barter: Vec<Listing>,
    pub donate_available: Vec<Listing>,
    pub donate_claimed: Vec<Listing>,
}

impl FarmerGroups {
    pub fn is_empty(&self) -> bool {
        self.sell.is_empty()
            && self.barter.is_empty()
            && self.donate_available.is_empty()
            && self.donate_claimed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sell.len() + self.barter.len() + self.donate_available.len() + self.donate_claimed.len()
    }
}

/// Split already-visible listings into sections, preserving order.
pub fn group_for_farmer(listings: Vec<Listing>) -> FarmerGroups {
    let mut groups = FarmerGroups::default();
    for listing in listings {
        match (listing.listing_type, listing.status) {
            (ListingType::Sell, _) => groups.sell.push(listing),
            (ListingType::Barter, _) => groups.barter.push(listing),
            (ListingType::Donate, ListingStatus::Available) => groups.donate_available.push(listing),
            (ListingType::Donate, ListingStatus::Claimed) => groups.donate_claimed.push(listing),
        }
    }
    groups
}

use shared_types::{Listing, ListingStatus, ListingType, Role, Session};

/// A button offered on a listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingAction {
    Edit,
    Delete,
    /// Navigate to the payment page for a sell listing.
    Buy,
    /// Notify the farmer of a barter offer.
    Offer,
    /// Claim an available donation.
    Claim,
}

impl ListingAction {
    pub fn label(&self) -> &'static str {
        match self {
            ListingAction::Edit => "Edit",
            ListingAction::Delete => "Delete",
            ListingAction::Buy => "Buy",
            ListingAction::Offer => "Offer/Barter",
            ListingAction::Claim => "Claim Donation",
        }
    }
}

/// Per-role rules for which listings are shown and what can be done with them.
///
/// Chosen once per page from the session; the board never branches on the
/// role anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleView {
    /// Sees only their own listings, in every status.
    Farmer { username: String },
    /// Sees available sell and barter listings.
    Buyer,
    /// Sees available donations.
    Ngo { username: String },
}

impl RoleView {
    pub fn for_session(session: &Session) -> Self {
        match session.role {
            Role::Farmer => RoleView::Farmer {
                username: session.username.clone(),
            },
            Role::Buyer => RoleView::Buyer,
            Role::Ngo => RoleView::Ngo {
                username: session.username.clone(),
            },
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RoleView::Farmer { .. } => Role::Farmer,
            RoleView::Buyer => Role::Buyer,
            RoleView::Ngo { .. } => Role::Ngo,
        }
    }

    /// Role visibility rule, applied before any user filter.
    pub fn is_visible(&self, listing: &Listing) -> bool {
        match self {
            RoleView::Farmer { username } => listing.farmer_id == *username,
            RoleView::Buyer => {
                matches!(listing.listing_type, ListingType::Sell | ListingType::Barter)
                    && listing.status == ListingStatus::Available
            }
            RoleView::Ngo { .. } => {
                listing.listing_type == ListingType::Donate
                    && listing.status == ListingStatus::Available
            }
        }
    }

    /// Keep only the listings this role may see, preserving order.
    pub fn visible(&self, listings: Vec<Listing>) -> Vec<Listing> {
        listings.into_iter().filter(|l| self.is_visible(l)).collect()
    }

    /// Buttons to attach to a listing card.
    pub fn actions(&self, listing: &Listing) -> Vec<ListingAction> {
        match self {
            RoleView::Farmer { username } if listing.farmer_id == *username => {
                vec![ListingAction::Edit, ListingAction::Delete]
            }
            RoleView::Farmer { .. } => Vec::new(),
            RoleView::Buyer => match listing.listing_type {
                ListingType::Sell => vec![ListingAction::Buy],
                ListingType::Barter => vec![ListingAction::Offer],
                ListingType::Donate => Vec::new(),
            },
            RoleView::Ngo { .. } => {
                if listing.listing_type == ListingType::Donate && listing.is_available() {
                    vec![ListingAction::Claim]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

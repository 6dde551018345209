//! Marketplace client: HTTP API access plus the DOM-free page logic the
//! Dioxus app renders.

pub mod api;
pub mod config;
pub mod session;

// Page logic
pub mod analytics;
pub mod auth;
pub mod board;
pub mod listing_form;
pub mod payment;
pub mod profile_form;
pub mod role_view;

pub use api::ApiClient;
pub use board::{BoardQuery, FarmerGroups, SortOrder, TypeFilter};
pub use role_view::{ListingAction, RoleView};
pub use session::{Access, GuardOutcome};

pub mod config;
pub mod error;

// Marketplace domain modules
pub mod analytics;
pub mod listing;
pub mod models;
pub mod profile;

pub use config::*;
pub use error::*;

pub use analytics::*;
pub use listing::*;
pub use models::*;
pub use profile::*;

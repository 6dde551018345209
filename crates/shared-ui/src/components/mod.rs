// Layout
pub mod card;
pub mod empty_state;
pub mod page_header;
pub mod skeleton;

// Forms and controls
pub mod badge;
pub mod button;
pub mod field;
pub mod filter_bar;
pub mod form;

// Overlays
pub mod alert_dialog;
pub mod sheet;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use empty_state::*;
pub use field::*;
pub use filter_bar::*;
pub use form::*;
pub use page_header::*;
pub use sheet::*;
pub use skeleton::*;
pub use toast::*;

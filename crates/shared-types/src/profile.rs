use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// An NGO's organisation profile, one per NGO account.
///
/// Created or overwritten by `POST /ngo/profile` (upsert keyed by `ngo_id`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NgoProfile {
    pub ngo_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Organization name is required"))
    )]
    pub org_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Contact is required"))
    )]
    pub contact: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Address is required"))
    )]
    pub address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Focus area is required"))
    )]
    pub focus_area: String,
}

impl NgoProfile {
    /// Copy with every free-text field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            ngo_id: self.ngo_id.trim().to_string(),
            org_name: self.org_name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            address: self.address.trim().to_string(),
            focus_area: self.focus_area.trim().to_string(),
        }
    }
}

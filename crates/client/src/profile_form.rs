//! NGO profile panel: lookup state and submit validation.

use crate::api::ApiClient;
use shared_types::{AppError, NgoProfile};
use validator::Validate;

pub const PROFILE_SAVED_NOTICE: &str = "Profile saved!";

/// What the panel shows after the lookup completes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    /// No profile yet: show the empty-state prompt and a blank form.
    Missing,
    /// Pre-fill the edit form.
    Existing(NgoProfile),
}

impl ProfileState {
    /// Form contents to start editing from.
    pub fn form(&self, ngo_id: &str) -> NgoProfile {
        match self {
            ProfileState::Missing => NgoProfile {
                ngo_id: ngo_id.to_string(),
                ..Default::default()
            },
            ProfileState::Existing(p) => p.clone(),
        }
    }
}

/// Trim the form, stamp it with the NGO id, and check all fields are filled.
pub fn prepare_profile(form: &NgoProfile, ngo_id: &str) -> Result<NgoProfile, AppError> {
    let mut profile = form.trimmed();
    profile.ngo_id = ngo_id.to_string();
    profile.validate()?;
    Ok(profile)
}

pub async fn load_profile(api: &ApiClient, ngo_id: &str) -> Result<ProfileState, AppError> {
    Ok(match api.ngo_profile(ngo_id).await? {
        Some(profile) => ProfileState::Existing(profile),
        None => ProfileState::Missing,
    })
}

/// Validate then upsert. Nothing is sent when validation fails.
pub async fn save_profile(api: &ApiClient, form: &NgoProfile, ngo_id: &str) -> Result<NgoProfile, AppError> {
    let profile = prepare_profile(form, ngo_id)?;
    api.save_ngo_profile(&profile).await
}

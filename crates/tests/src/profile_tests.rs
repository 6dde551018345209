use client::profile_form::{load_profile, save_profile, ProfileState};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NgoProfile};

use crate::common;

fn form() -> NgoProfile {
    NgoProfile {
        ngo_id: String::new(),
        org_name: " Food Bank ".into(),
        contact: "555-0100".into(),
        address: "1 Main St".into(),
        focus_area: "Hunger".into(),
    }
}

#[tokio::test]
async fn test_missing_profile_is_not_an_error() {
    let (api, _state) = common::spawn_api().await;

    let state = load_profile(&api, "helpers").await.expect("lookup");

    assert_eq!(state, ProfileState::Missing);
    assert_eq!(state.form("helpers").ngo_id, "helpers");
}

#[tokio::test]
async fn test_save_then_load_prefills_the_form() {
    let (api, _state) = common::spawn_api().await;

    let saved = save_profile(&api, &form(), "helpers").await.expect("save");
    assert_eq!(saved.org_name, "Food Bank");
    assert_eq!(saved.ngo_id, "helpers");

    let state = load_profile(&api, "helpers").await.expect("lookup");
    assert_eq!(state, ProfileState::Existing(saved));
}

#[tokio::test]
async fn test_save_overwrites_existing_profile() {
    let (api, state) = common::spawn_api().await;
    save_profile(&api, &form(), "helpers").await.unwrap();

    let updated = NgoProfile {
        focus_area: "Nutrition".into(),
        ..form()
    };
    save_profile(&api, &updated, "helpers").await.unwrap();

    let s = state.lock().unwrap();
    assert_eq!(s.profiles.len(), 1);
    assert_eq!(s.profiles["helpers"].focus_area, "Nutrition");
}

#[tokio::test]
async fn test_blank_field_is_rejected_before_sending() {
    let (api, state) = common::spawn_api().await;
    let blank = NgoProfile {
        address: "   ".into(),
        ..form()
    };

    let err = save_profile(&api, &blank, "helpers").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors["address"], "Address is required");
    assert!(state.lock().unwrap().profiles.is_empty());
}

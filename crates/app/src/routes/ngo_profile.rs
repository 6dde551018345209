use crate::notify;
use crate::session::use_session;
use client::profile_form::{load_profile, save_profile, ProfileState, PROFILE_SAVED_NOTICE};
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    use_toast, Button, Card, EmptyState, Form, FormActions, FormError, PageHeader, SkeletonCards, TextField,
};
use std::collections::HashMap;

/// The NGO's organisation profile: shown pre-filled when one exists,
/// otherwise an empty prompt above a blank form.
#[component]
pub fn NgoProfile() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut form = use_signal(shared_types::NgoProfile::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let load_api = api.clone();
    let mut profile = use_resource(move || {
        let api = load_api.clone();
        let ngo_id = session.username();
        async move { load_profile(&api, &ngo_id).await }
    });

    use_effect(move || match &*profile.read() {
        Some(Ok(state)) => form.set(state.form(&session.peek_username())),
        Some(Err(e)) => {
            tracing::error!(error = %e, "Failed to load NGO profile");
            error_msg.set(Some(e.notice("load profile")));
        }
        None => {}
    });

    let handle_save = move |_: FormEvent| {
        if *saving.read() {
            return;
        }
        field_errors.set(HashMap::new());
        error_msg.set(None);
        let draft = form.read().clone();
        let ngo_id = session.username();
        let api = api.clone();

        spawn(async move {
            saving.set(true);
            match save_profile(&api, &draft, &ngo_id).await {
                Ok(saved) => {
                    form.set(saved);
                    notify::success(&toast, PROFILE_SAVED_NOTICE);
                    profile.restart();
                }
                Err(e) => {
                    notify::failure(&toast, "save profile", &e);
                    error_msg.set(Some(e.notice("save profile")));
                    field_errors.set(e.field_errors);
                }
            }
            saving.set(false);
        });
    };

    let missing = matches!(&*profile.read(), Some(Ok(ProfileState::Missing)));
    let loading = profile.read().is_none();
    let card_title = card_title((*profile.read()).as_ref());
    let current = form.read().clone();
    let errors = field_errors.read().clone();

    if loading {
        return rsx! {
            PageHeader { title: "NGO Profile" }
            SkeletonCards { count: 1 }
        };
    }

    rsx! {
        PageHeader {
            title: "NGO Profile",
            subtitle: "Tell farmers who receives their donations.",
        }

        if missing {
            EmptyState { message: "No profile found. Fill in the form below to create one." }
        }

        Card {
            title: card_title.to_string(),
            if let Some(err) = error_msg() {
                FormError { message: err }
            }
            Form { onsubmit: handle_save,
                TextField {
                    label: "Organization name",
                    value: current.org_name.clone(),
                    error: errors.get("org_name").cloned(),
                    on_input: move |e: FormEvent| form.write().org_name = e.value(),
                }
                TextField {
                    label: "Contact",
                    value: current.contact.clone(),
                    error: errors.get("contact").cloned(),
                    on_input: move |e: FormEvent| form.write().contact = e.value(),
                }
                TextField {
                    label: "Address",
                    value: current.address.clone(),
                    error: errors.get("address").cloned(),
                    on_input: move |e: FormEvent| form.write().address = e.value(),
                }
                TextField {
                    label: "Focus area",
                    value: current.focus_area.clone(),
                    error: errors.get("focus_area").cloned(),
                    on_input: move |e: FormEvent| form.write().focus_area = e.value(),
                }
                FormActions {
                    Button {
                        button_type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Profile" }
                    }
                }
            }
        }
    }
}

/// Only a profile that was actually loaded is edited; a failed lookup
/// starts from the create form.
fn card_title(lookup: Option<&Result<ProfileState, AppError>>) -> &'static str {
    match lookup {
        Some(Ok(ProfileState::Existing(_))) => "Edit Profile",
        _ => "Create Profile",
    }
}

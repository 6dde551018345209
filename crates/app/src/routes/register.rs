use super::Route;
use client::auth::REGISTER_SUCCESS_NOTICE;
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Button, Card, Form, FormActions, FormError, SelectField, TextField};
use std::collections::HashMap;

/// Account creation. Success sends the user back to login with a notice.
#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Farmer.as_str().to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| {
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match client::auth::register(&api, &username(), &password(), &role()).await {
                Ok(()) => {
                    navigator().push(Route::Login {
                        notice: REGISTER_SUCCESS_NOTICE.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Registration failed");
                    error_msg.set(Some(e.notice("register")));
                    field_errors.set(e.field_errors);
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Register",
                subtitle: "Create a Harvest Hub account",

                if let Some(err) = error_msg() {
                    FormError { message: err }
                }

                Form { onsubmit: handle_register,
                    TextField {
                        label: "Username",
                        value: username(),
                        error: field_errors.read().get("username").cloned(),
                        on_input: move |e: FormEvent| username.set(e.value()),
                    }
                    TextField {
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        error: field_errors.read().get("password").cloned(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    SelectField {
                        label: "Role",
                        value: role(),
                        error: field_errors.read().get("role").cloned(),
                        on_change: move |e: FormEvent| role.set(e.value()),
                        for r in ALL_ROLES.iter() {
                            option { value: r.as_str(), selected: role() == r.as_str(), {r.display_name()} }
                        }
                    }
                    FormActions {
                        Button {
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Registering..." } else { "Register" }
                        }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login { notice: String::new() }, "Login" }
                }
            }
        }
    }
}

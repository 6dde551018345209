use super::{home_route, Route};
use crate::session::use_session;
use client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{Button, Card, Form, FormActions, FormError, TextField};

/// Username/password sign-in. `notice` carries the message from a guard
/// redirect or a completed registration, and is empty otherwise.
#[component]
pub fn Login(notice: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the role's board.
    if session.is_restored() {
        if let Some(current) = session.session() {
            navigator().replace(home_route(current.role));
        }
    }

    let handle_login = move |_: FormEvent| {
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);

            match client::auth::login(&api, &username(), &password()).await {
                Ok(signed_in) => {
                    let target = home_route(signed_in.role);
                    session.sign_in(signed_in);
                    navigator().push(target);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error_msg.set(Some(e.notice("login")));
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
                title: "Login",
                subtitle: "Sign in to Harvest Hub",

                if !notice.is_empty() {
                    div { class: "notice-banner", "{notice}" }
                }
                if let Some(err) = error_msg() {
                    FormError { message: err }
                }

                Form { onsubmit: handle_login,
                    TextField {
                        label: "Username",
                        value: username(),
                        on_input: move |e: FormEvent| username.set(e.value()),
                    }
                    TextField {
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    FormActions {
                        Button {
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}

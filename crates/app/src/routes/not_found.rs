use super::Route;
use dioxus::prelude::*;
use shared_ui::EmptyState;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::warn!(%path, "No route matched");

    rsx! {
        div { class: "auth-page",
            EmptyState { message: "Page not found: {path}",
                Link { to: Route::Home {}, "Go home" }
            }
        }
    }
}

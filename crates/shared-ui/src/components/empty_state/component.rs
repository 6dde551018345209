use dioxus::prelude::*;

/// Centered placeholder for empty lists and failed loads, with an optional
/// call to action underneath.
#[component]
pub fn EmptyState(message: String, #[props(default)] children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-empty-state",
            p { class: "hh-empty-message", "{message}" }
            {children}
        }
    }
}

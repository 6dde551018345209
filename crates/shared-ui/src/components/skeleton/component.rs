use dioxus::prelude::*;

/// Placeholder cards shown while listings or analytics load.
#[component]
pub fn SkeletonCards(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-skeleton-grid", "aria-busy": "true",
            for i in 0..count {
                div { key: "{i}", class: "hh-skeleton-card",
                    div { class: "hh-skeleton-line", "data-width": "wide" }
                    div { class: "hh-skeleton-line" }
                    div { class: "hh-skeleton-line" }
                    div { class: "hh-skeleton-line", "data-width": "short" }
                }
            }
        }
    }
}

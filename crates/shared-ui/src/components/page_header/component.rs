use dioxus::prelude::*;

/// Page title row with an optional subtitle and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-page-header",
            div { class: "hh-page-heading",
                h1 { class: "hh-page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "hh-page-subtitle", "{subtitle}" }
                }
            }
            div { class: "hh-page-actions", {children} }
        }
    }
}

/// Titled block within a page, e.g. one of the farmer's listing groups.
#[component]
pub fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { class: "hh-section",
            h2 { class: "hh-section-title", "{title}" }
            {children}
        }
    }
}

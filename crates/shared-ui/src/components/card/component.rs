use dioxus::prelude::*;

/// A bordered surface with an optional title and footer row.
///
/// Listing cards put the crop name in `title`, the details in the body,
/// and the action buttons in `footer`.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] subtitle: String,
    #[props(default)] footer: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "hh-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if !title.is_empty() {
                div { class: "hh-card-header",
                    h3 { class: "hh-card-title", "{title}" }
                    if !subtitle.is_empty() {
                        p { class: "hh-card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "hh-card-body", {children} }
            if let Some(footer) = footer {
                div { class: "hh-card-footer", {footer} }
            }
        }
    }
}

/// A `label: value` line inside a card body.
#[component]
pub fn CardField(label: String, value: String) -> Element {
    rsx! {
        p { class: "hh-card-field",
            strong { "{label}:" }
            " {value}"
        }
    }
}

/// Responsive grid of cards.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        div { class: "hh-card-grid", {children} }
    }
}

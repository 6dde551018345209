use dioxus::prelude::*;

/// Side panel overlay holding a form. Clicking the backdrop or the close
/// button calls `on_close`.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "hh-sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "hh-sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "hh-sheet-header",
                    div {
                        h2 { class: "hh-sheet-title", "{title}" }
                        if !description.is_empty() {
                            p { class: "hh-sheet-description", "{description}" }
                        }
                    }
                    button {
                        class: "hh-sheet-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div { class: "hh-sheet-body", {children} }
            }
        }
    }
}

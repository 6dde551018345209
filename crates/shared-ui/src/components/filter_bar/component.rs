use dioxus::prelude::*;

/// Flex row holding the search box and filter/sort dropdowns above a board.
#[component]
pub fn FilterBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-filter-bar", role: "search",
            {children}
        }
    }
}

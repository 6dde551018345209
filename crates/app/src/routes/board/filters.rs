use client::{BoardQuery, SortOrder, TypeFilter};
use dioxus::prelude::*;
use shared_types::ALL_LISTING_TYPES;
use shared_ui::{FilterBar, SelectField, TextField};

/// Search box plus type and sort selects bound to the board query.
#[component]
pub fn BoardFilters(query: Signal<BoardQuery>) -> Element {
    let current = query.read().clone();
    let type_key = current.type_filter.key();
    let sort_key = current.sort.key();

    rsx! {
        FilterBar {
            TextField {
                placeholder: "Search crops...",
                value: current.search.clone(),
                on_input: move |e: FormEvent| query.write().search = e.value(),
            }
            SelectField {
                value: type_key.to_string(),
                on_change: move |e: FormEvent| query.write().type_filter = TypeFilter::from_key(&e.value()),
                option { value: "all", selected: type_key == "all", "All types" }
                for t in ALL_LISTING_TYPES.iter() {
                    option { value: t.as_str(), selected: type_key == t.as_str(), {t.display_name()} }
                }
            }
            SelectField {
                value: sort_key.to_string(),
                on_change: move |e: FormEvent| query.write().sort = SortOrder::from_key(&e.value()),
                option { value: "", selected: sort_key.is_empty(), "Sort by" }
                option { value: "new", selected: sort_key == "new", "Newest" }
                option { value: "priceAsc", selected: sort_key == "priceAsc", "Price: Low to High" }
                option { value: "priceDesc", selected: sort_key == "priceDesc", "Price: High to Low" }
            }
        }
    }
}

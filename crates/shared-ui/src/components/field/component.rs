use dioxus::prelude::*;

/// Labelled text input with an inline validation message.
#[component]
pub fn TextField(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    /// `text`, `password`, `number`, `date`.
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "hh-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-field",
            if !label.is_empty() {
                label { class: "hh-field-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(msg) = error {
                span { class: "hh-field-error", "{msg}" }
            }
        }
    }
}

/// Labelled native `<select>`; children are `option` elements.
#[component]
pub fn SelectField(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "hh-field",
            if !label.is_empty() {
                label { class: "hh-field-label", "{label}" }
            }
            select {
                class: "hh-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| on_change.call(evt),
                {children}
            }
            if let Some(msg) = error {
                span { class: "hh-field-error", "{msg}" }
            }
        }
    }
}

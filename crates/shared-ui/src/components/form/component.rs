use dioxus::prelude::*;

/// Form wrapper that suppresses the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    /// Render fields in a two-column grid on wide screens.
    #[props(default = false)]
    columns: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let layout = if columns { "columns" } else { "stack" };
    let base = vec![
        Attribute::new("class", "hh-form", None, false),
        Attribute::new("data-layout", layout, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Row of submit/cancel buttons at the bottom of a form.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "hh-form-actions", {children} }
    }
}

/// Banner for a form-level error such as a server rejection.
#[component]
pub fn FormError(message: String) -> Element {
    rsx! {
        div { class: "hh-form-error", role: "alert", "{message}" }
    }
}

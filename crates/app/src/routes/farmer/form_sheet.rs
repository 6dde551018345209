use crate::notify;
use crate::session::use_session;
use client::listing_form::{fair_price, ListingForm};
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Listing, ALL_LISTING_TYPES};
use shared_ui::{use_toast, Button, ButtonVariant, Form, FormActions, FormError, SelectField, Sheet, TextField};
use std::collections::HashMap;

/// Whether the sheet creates a new listing or edits `initial`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    fn action(&self) -> &'static str {
        match self {
            FormMode::Create => "add listing",
            FormMode::Edit => "update listing",
        }
    }

    fn success_notice(&self) -> &'static str {
        match self {
            FormMode::Create => "Listing added!",
            FormMode::Edit => "Listing updated!",
        }
    }
}

/// Create/edit form for a farmer's listing, rendered inside a Sheet.
///
/// Mounted fresh each time it opens, so the form starts from `initial`.
/// `on_saved` fires after the server accepts the change; the caller
/// restarts its listings fetch.
#[component]
pub fn ListingFormSheet(
    mode: FormMode,
    initial: Option<Listing>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let toast = use_toast();

    let mut form = use_signal(|| {
        initial
            .as_ref()
            .map(ListingForm::from_listing)
            .unwrap_or_default()
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        let Some(owner) = session.session() else {
            return;
        };
        field_errors.set(HashMap::new());
        error_msg.set(None);

        let draft = match form.read().to_draft(&owner) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "Listing form rejected");
                error_msg.set(Some(e.message.clone()));
                field_errors.set(e.field_errors);
                return;
            }
        };
        let editing = initial.as_ref().map(|l| l.id);
        let api = api.clone();

        spawn(async move {
            in_flight.set(true);
            let result = match (mode, editing) {
                (FormMode::Edit, Some(id)) => api.update_listing(id, &draft).await,
                _ => api.create_listing(&draft).await,
            };
            match result {
                Ok(_) => {
                    form.set(ListingForm::default());
                    on_saved.call(());
                    on_close.call(());
                    notify::success(&toast, mode.success_notice());
                }
                Err(e) => {
                    notify::failure(&toast, mode.action(), &e);
                    error_msg.set(Some(e.notice(mode.action())));
                }
            }
            in_flight.set(false);
        });
    };

    let current = form.read().clone();
    let errors = field_errors.read().clone();
    let suggested = match (
        current.wholesale_price.trim().parse::<f64>(),
        current.retail_price.trim().parse::<f64>(),
    ) {
        (Ok(w), Ok(r)) => fair_price(w, r).ok(),
        _ => None,
    };

    let (title, submit_label) = match mode {
        FormMode::Create => ("Add Listing", "Add Listing"),
        FormMode::Edit => ("Edit Listing", "Update Listing"),
    };

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| on_close.call(()),
            title: title.to_string(),
            description: "Crop name, quantity, type and date are required.",

            if let Some(err) = error_msg() {
                FormError { message: err }
            }

            Form { onsubmit: handle_save,
                TextField {
                    label: "Crop name",
                    value: current.title.clone(),
                    error: errors.get("title").cloned(),
                    on_input: move |e: FormEvent| form.write().title = e.value(),
                }
                TextField {
                    label: "Quantity (kg)",
                    value: current.quantity.clone(),
                    error: errors.get("quantity").cloned(),
                    on_input: move |e: FormEvent| form.write().quantity = e.value(),
                }
                SelectField {
                    label: "Type",
                    value: current.listing_type.clone(),
                    error: errors.get("type").cloned(),
                    on_change: move |e: FormEvent| form.write().listing_type = e.value(),
                    for t in ALL_LISTING_TYPES.iter() {
                        option {
                            value: t.as_str(),
                            selected: current.listing_type == t.as_str(),
                            {t.display_name()}
                        }
                    }
                }
                TextField {
                    label: "Available date",
                    input_type: "date",
                    value: current.available_date.clone(),
                    error: errors.get("available_date").cloned(),
                    on_input: move |e: FormEvent| form.write().available_date = e.value(),
                }
                if current.is_sell() {
                    TextField {
                        label: "Price",
                        input_type: "number",
                        placeholder: "Leave empty to use the fair price",
                        value: current.price.clone(),
                        error: errors.get("price").cloned(),
                        on_input: move |e: FormEvent| form.write().price = e.value(),
                    }
                    TextField {
                        label: "Wholesale price",
                        input_type: "number",
                        value: current.wholesale_price.clone(),
                        error: errors.get("wholesale_price").cloned(),
                        on_input: move |e: FormEvent| form.write().wholesale_price = e.value(),
                    }
                    TextField {
                        label: "Retail price",
                        input_type: "number",
                        value: current.retail_price.clone(),
                        error: errors.get("retail_price").cloned(),
                        on_input: move |e: FormEvent| form.write().retail_price = e.value(),
                    }
                    if let Some(fair) = suggested {
                        p { class: "fair-price-hint", "Fair price: ${fair:.2}" }
                    }
                }
                FormActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_: MouseEvent| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        if in_flight() { "Saving..." } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}

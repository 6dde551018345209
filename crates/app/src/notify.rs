use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

/// Confirm a completed action ("Listing added!").
pub fn success(toasts: &Toasts, message: impl Into<String>) {
    toasts.success(message.into(), ToastOptions::new());
}

/// Plain information, e.g. "Action sent to farmer: Alice".
pub fn info(toasts: &Toasts, message: impl Into<String>) {
    toasts.info(message.into(), ToastOptions::new());
}

/// Report a failed `action` and log it. Server messages are shown verbatim.
pub fn failure(toasts: &Toasts, action: &str, err: &AppError) {
    if err.is_transport() {
        tracing::error!(error = %err, action, "Request failed");
    } else {
        tracing::warn!(error = %err, action, "Request rejected");
    }
    toasts.error(err.notice(action), ToastOptions::new());
}

/// Text for the barter/offer action.
pub fn offer_notice(farmer: &str) -> String {
    format!("Action sent to farmer: {farmer}")
}

pub fn claim_notice(farmer: &str) -> String {
    format!("Donation claimed from farmer: {farmer}")
}

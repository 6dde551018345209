//! Session context and its browser-storage backing.
//!
//! This is the only module that touches `localStorage`. Pages read the
//! session through [`use_session`] and never see the storage key.

use client::session::{decode_session, encode_session, SESSION_STORAGE_KEY};
use dioxus::prelude::*;
use serde_json::Value;
use shared_types::Session;

/// The signed-in user, shared through context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
    /// False until the stored record has been read back.
    pub restored: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    /// Load the stored record, if any, into the context.
    pub async fn restore(&mut self) {
        let stored = read_stored().await;
        if let Some(session) = &stored {
            tracing::debug!(username = %session.username, role = %session.role, "Session restored");
        }
        self.current.set(stored);
        self.restored.set(true);
    }

    /// Persist a fresh login. Replaces any previous session.
    pub fn sign_in(&mut self, session: Session) {
        write_stored(&session);
        tracing::info!(username = %session.username, role = %session.role, "Signed in");
        self.current.set(Some(session));
        self.restored.set(true);
    }

    pub fn sign_out(&mut self) {
        clear_stored();
        tracing::info!("Signed out");
        self.current.set(None);
    }

    pub fn session(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    /// Username of the signed-in user, empty when signed out.
    pub fn username(&self) -> String {
        self.current
            .read()
            .as_ref()
            .map(|s| s.username.clone())
            .unwrap_or_default()
    }

    /// Like [`Self::username`] without subscribing the caller to changes.
    pub fn peek_username(&self) -> String {
        self.current
            .peek()
            .as_ref()
            .map(|s| s.username.clone())
            .unwrap_or_default()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

async fn read_stored() -> Option<Session> {
    let script = format!("return localStorage.getItem({});", js_string(SESSION_STORAGE_KEY));
    match document::eval(&script).join::<Option<String>>().await {
        Ok(raw) => decode_session(raw.as_deref()),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read session from storage");
            None
        }
    }
}

fn write_stored(session: &Session) {
    document::eval(&format!(
        "localStorage.setItem({}, {});",
        js_string(SESSION_STORAGE_KEY),
        js_string(&encode_session(session)),
    ));
}

fn clear_stored() {
    document::eval(&format!(
        "localStorage.removeItem({});",
        js_string(SESSION_STORAGE_KEY)
    ));
}

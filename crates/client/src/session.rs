//! Session guard and session-record encoding.
//!
//! The session record is the `{username, role}` pair persisted under
//! [`SESSION_STORAGE_KEY`]. Pages declare an [`Access`] requirement and ask
//! [`guard`] whether the current session satisfies it.

use shared_types::{Role, Session};

/// Browser-storage key holding the JSON-encoded session record.
pub const SESSION_STORAGE_KEY: &str = "activeUser";

/// What a page requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any logged-in user.
    AnyRole,
    /// Only a user with exactly this role.
    Role(Role),
}

/// Result of checking a session against a page requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Authorized(Session),
    /// Show `notice` and send the user to the login page.
    Redirect { notice: String },
}

impl GuardOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardOutcome::Authorized(_))
    }
}

/// Decide whether `session` may view a page requiring `access`.
pub fn guard(session: Option<&Session>, access: Access) -> GuardOutcome {
    match (session, access) {
        (Some(s), Access::AnyRole) => GuardOutcome::Authorized(s.clone()),
        (Some(s), Access::Role(required)) if s.role == required => {
            GuardOutcome::Authorized(s.clone())
        }
        (_, Access::Role(required)) => GuardOutcome::Redirect {
            notice: format!(
                "Unauthorized! Please login as {}.",
                required.display_name()
            ),
        },
        (None, Access::AnyRole) => GuardOutcome::Redirect {
            notice: "Please login first".to_string(),
        },
    }
}

/// Serialize a session for browser storage.
pub fn encode_session(session: &Session) -> String {
    // Session is two plain strings; serialization cannot fail.
    serde_json::to_string(session).unwrap_or_default()
}

/// Parse a stored session record. Corrupt or foreign records count as
/// "no session".
pub fn decode_session(raw: Option<&str>) -> Option<Session> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.username.is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable session record");
            None
        }
    }
}

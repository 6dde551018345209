use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

/// Marketplace role controlling which pages and listing actions a user gets.
///
/// - `Farmer`: creates, edits and deletes their own listings.
/// - `Buyer`: browses sell/barter listings, buys or offers a barter.
/// - `Ngo`: browses available donations and claims them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Buyer,
    Ngo,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Farmer, Role::Buyer, Role::Ngo];

impl Role {
    /// Parse a wire/role-select value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "farmer" => Some(Role::Farmer),
            "buyer" => Some(Role::Buyer),
            "ngo" => Some(Role::Ngo),
            _ => None,
        }
    }

    /// Lowercase string used on the wire and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Buyer => "buyer",
            Role::Ngo => "ngo",
        }
    }

    /// Capitalized name for notices ("Please login as Farmer").
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Buyer => "Buyer",
            Role::Ngo => "Ngo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The locally persisted "active user" record.
///
/// One per browser profile; the last successful login overwrites it and
/// logout removes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Registration request.
///
/// `role` is kept as the raw select value so an empty selection can be
/// reported as a field error rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Role is required"))
    )]
    pub role: String,
}

/// Successful login response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Session::new(r.username, r.role)
    }
}

/// Body of a successful mutation. Servers answer either with the full
/// record or with `{id, message}`; both decode into this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MutationAck {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

//! Login and registration flows.

use crate::api::ApiClient;
use shared_types::{AppError, LoginRequest, RegisterRequest, Role, Session};
use validator::Validate;

/// Shown on the login page after a successful registration.
pub const REGISTER_SUCCESS_NOTICE: &str = "Registration successful! Please login.";

/// Trim and validate registration input. Nothing is sent when this fails.
pub fn register_request(username: &str, password: &str, role: &str) -> Result<RegisterRequest, AppError> {
    let request = RegisterRequest {
        username: username.trim().to_string(),
        password: password.trim().to_string(),
        role: role.trim().to_lowercase(),
    };
    request.validate()?;
    if Role::parse(&request.role).is_none() {
        return Err(AppError::field("role", "Choose farmer, buyer, or ngo"));
    }
    Ok(request)
}

/// Trimmed credentials. Empty values are left for the server to reject.
pub fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.trim().to_string(),
        password: password.trim().to_string(),
    }
}

/// Path of each role's landing page.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Farmer => "/farmer",
        Role::Buyer => "/buyer",
        Role::Ngo => "/ngo",
    }
}

/// Validate and submit a registration. On success the caller sends the
/// user to the login page with [`REGISTER_SUCCESS_NOTICE`].
pub async fn register(
    api: &ApiClient,
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), AppError> {
    let request = register_request(username, password, role)?;
    api.register(&request).await?;
    Ok(())
}

/// Submit credentials and build the session the caller should persist.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<Session, AppError> {
    let response = api.login(&login_request(username, password)).await?;
    Ok(Session::from(response))
}

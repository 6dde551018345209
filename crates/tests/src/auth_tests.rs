use client::auth::{home_path, login, register};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

use crate::common;

#[tokio::test]
async fn test_register_then_login_returns_session() {
    let (api, _state) = common::spawn_api().await;

    register(&api, "  alice ", "secret", "Farmer").await.expect("register");
    let session = login(&api, "alice", " secret ").await.expect("login");

    assert_eq!(session.username, "alice");
    assert_eq!(session.role, Role::Farmer);
    assert_eq!(home_path(session.role), "/farmer");
}

#[tokio::test]
async fn test_register_stores_trimmed_lowercase_role() {
    let (api, state) = common::spawn_api().await;

    register(&api, "helpers", "pw", " NGO ").await.expect("register");

    let s = state.lock().unwrap();
    let (_, role) = s.users.get("helpers").expect("user stored");
    assert_eq!(role, "ngo");
}

#[tokio::test]
async fn test_duplicate_username_surfaces_server_message() {
    let (api, _state) = common::spawn_api().await;
    register(&api, "bob", "pw", "buyer").await.expect("first register");

    let err = register(&api, "bob", "pw", "buyer").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.notice("register"), "Username already exists");
}

#[tokio::test]
async fn test_register_with_blank_field_sends_nothing() {
    let (api, state) = common::spawn_api().await;

    let err = register(&api, "   ", "pw", "farmer").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("username"));
    assert!(state.lock().unwrap().users.is_empty());
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let (api, _state) = common::spawn_api().await;
    register(&api, "carol", "right", "buyer").await.expect("register");

    let err = login(&api, "carol", "wrong").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.notice("login"), "Invalid username or password");
}

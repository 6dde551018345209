use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_unreachable_server_gives_generic_notice() {
    let api = common::unreachable_api().await;

    let err = api.list_listings().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Transport);
    assert_eq!(err.notice("fetch listings"), "Failed to fetch listings");
}

#[tokio::test]
async fn test_login_transport_failure_notice() {
    let api = common::unreachable_api().await;

    let err = client::auth::login(&api, "alice", "pw").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.notice("login"), "Failed to login");
}

#[tokio::test]
async fn test_server_error_message_is_shown_verbatim() {
    let api = common::spawn_broken_api().await;

    let err = api.list_listings().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.notice("fetch listings"), "DB connection failed");
}

#[tokio::test]
async fn test_profile_lookup_failure_is_not_treated_as_missing() {
    let api = common::spawn_broken_api().await;

    let err = client::profile_form::load_profile(&api, "helpers").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
}

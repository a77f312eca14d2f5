//! Login integration tests against the mock server.

mod common;

use common::MockServer;
use teacast_sdk::{ErrorKind, TeaCastError};

#[test]
fn valid_credentials_return_success_body() {
    let server = MockServer::start();
    let result = server.client().auth().login("testuser", "password").unwrap();

    assert_eq!(result.success, Some(true));
    assert_eq!(result.token.as_deref(), Some("fake-jwt-token"));
    assert_eq!(result.role.as_deref(), Some("admin"));
    assert_eq!(result.user.as_ref().unwrap()["username"], "testuser");
    assert!(result.is_success());
    assert_eq!(server.state.hits("/login"), 1);
}

#[test]
fn unauthorized_is_a_transport_error_with_server_message() {
    let server = MockServer::start();
    let err = server.client().auth().login("testuser", "wrong").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[test]
fn failure_flag_in_2xx_body_is_passed_through() {
    let server = MockServer::start();
    let result = server.client().auth().login("locked", "whatever").unwrap();

    assert_eq!(result.success, Some(false));
    assert_eq!(result.message.as_deref(), Some("Account locked"));
    assert!(!result.is_success());
}

#[test]
fn network_failure_propagates_without_retry() {
    let err = common::unreachable_client()
        .auth()
        .login("testuser", "password")
        .unwrap_err();

    assert!(matches!(err, TeaCastError::Http(_)));
    assert!(err.is_transport());
}

#[test]
fn repeated_logins_are_identical() {
    let server = MockServer::start();
    let client = server.client();

    let first = client.auth().login("testuser", "password").unwrap();
    let second = client.auth().login("testuser", "password").unwrap();
    assert_eq!(first, second);
    assert!(first.is_success());

    let rejected = client.auth().login("testuser", "wrong").unwrap_err();
    let rejected_again = client.auth().login("testuser", "wrong").unwrap_err();
    assert_eq!(rejected.status(), rejected_again.status());
    assert_eq!(rejected.server_message(), rejected_again.server_message());
    assert_eq!(server.state.hits("/login"), 4);
}

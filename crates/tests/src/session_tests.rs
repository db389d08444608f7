use api_client::TokenStore;
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, LoginRequest, UserRole};

use crate::common;

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "anita@casedesk.in".into(),
        password: "secret".into(),
    }
}

#[tokio::test]
async fn login_stores_session_and_later_calls_carry_bearer() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::POST,
        "/auth/login",
        json!({ "token": "tok-77", "user": common::user("EMPLOYEE") }),
    );
    server.mock.stub_ok(Method::GET, "/case/employee", json!([]));
    let (api, store) = server.client(None);

    let session = api.login(&login_request()).await.unwrap();
    api.employee_cases().await.unwrap();

    assert_eq!(session.user.role(), Some(UserRole::Employee));
    assert_eq!(store.token().as_deref(), Some("tok-77"));
    let requests = server.mock.requests();
    assert_eq!(requests[0].body["email"], "anita@casedesk.in");
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-77"));
}

#[tokio::test]
async fn login_with_unknown_role_is_refused() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::POST,
        "/auth/login",
        json!({ "token": "tok-x", "user": common::user("AUDITOR") }),
    );
    let (api, store) = server.client(None);

    let err = api.login(&login_request()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(store.load().is_none());
}

#[tokio::test]
async fn malformed_login_form_is_rejected_locally() {
    let server = common::test_server().await;
    let (api, _) = server.client(None);
    let req = LoginRequest {
        email: "not-an-email".into(),
        password: String::new(),
    };

    let err = api.login(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("password"), Some("Password is required"));
    assert!(server.mock.requests().is_empty());
}

#[tokio::test]
async fn unauthorized_response_clears_stored_session() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::GET,
        "/branch/all",
        StatusCode::UNAUTHORIZED,
        json!({ "success": false, "message": "Token expired" }),
    );
    let (api, store) = server.signed_in();

    let err = api.list_branches().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Token expired");
    assert!(store.load().is_none());
    assert!(api.session().is_none());
}

#[tokio::test]
async fn other_errors_keep_the_session() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::GET,
        "/branch/all",
        StatusCode::FORBIDDEN,
        json!({ "success": false, "message": "Not allowed" }),
    );
    let (api, store) = server.signed_in();

    let err = api.list_branches().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(store.token().as_deref(), Some("tok-admin"));
}

#[tokio::test]
async fn logout_drops_the_token() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::GET, "/branch/all", json!([]));
    let (api, _) = server.signed_in();

    api.logout();
    api.list_branches().await.unwrap();

    assert_eq!(server.mock.requests()[0].authorization, None);
}

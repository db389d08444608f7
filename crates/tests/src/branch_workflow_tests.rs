use api_client::{BranchBoard, BranchWorkflow};
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CreateBranchRequest};
use std::time::Duration;

use crate::common;

fn form() -> CreateBranchRequest {
    CreateBranchRequest {
        name: "  Nashik Road ".into(),
        address1: "Plot 9".into(),
        address2: "Near Station".into(),
        city: "Nashik".into(),
        pincode: "422101".into(),
        state: "Maharashtra".into(),
    }
}

#[tokio::test]
async fn created_branch_is_appended_and_dialog_closes() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::POST,
        "/branch/new",
        common::branch_json("BR-02", "Nashik Road", true),
    );
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);
    let mut board = BranchBoard::default();
    board.replace(vec![]);
    board.open_dialog();

    let branch = workflow.create(&form()).await.unwrap();
    board.on_created(branch);

    assert_eq!(server.mock.count(Method::POST, "/branch/new"), 1);
    let sent = &server.mock.requests()[0].body;
    assert_eq!(sent["name"], "Nashik Road");
    assert_eq!(sent["pincode"], "422101");
    assert!(!board.dialog_open);
    assert_eq!(board.branches.len(), 1);
    assert_eq!(board.branches[0].branch_code.as_deref(), Some("BR-02"));
}

#[tokio::test]
async fn blank_field_or_unknown_state_makes_no_request() {
    let server = common::test_server().await;
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);
    let mut req = form();
    req.city = "   ".into();
    req.state = "Atlantis".into();

    let err = workflow.create(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("city"), Some("city is required"));
    assert_eq!(err.field_error("state"), Some("Select a state from the list"));
    assert!(server.mock.requests().is_empty());
}

#[tokio::test]
async fn toggle_patches_then_reloads() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::PATCH, "/branch/toggle/BR-01", json!(null));
    server.mock.stub_ok(
        Method::GET,
        "/branch/all",
        json!([common::branch_json("BR-01", "Pune Central", false)]),
    );
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);

    let refreshed = workflow.toggle("BR-01").await.unwrap();

    assert_eq!(
        server.mock.trail(),
        vec!["PATCH /branch/toggle/BR-01", "GET /branch/all"]
    );
    assert!(!refreshed[0].active());
    assert!(!workflow.is_toggling("BR-01"));
}

#[tokio::test]
async fn branch_code_with_space_stays_in_one_segment() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::PATCH, "/branch/toggle/BR%2001", json!(null));
    server.mock.stub_ok(Method::GET, "/branch/all", json!([]));
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);

    workflow.toggle("BR 01").await.unwrap();

    assert_eq!(
        server.mock.trail(),
        vec!["PATCH /branch/toggle/BR%2001", "GET /branch/all"]
    );
}

#[tokio::test]
async fn failed_toggle_reports_and_releases_the_branch() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::PATCH,
        "/branch/toggle/BR-01",
        StatusCode::OK,
        json!({ "success": false, "message": "Branch has open cases" }),
    );
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);

    let err = workflow.toggle("BR-01").await.unwrap_err();

    assert_eq!(err.message, "Branch has open cases");
    assert!(!workflow.is_toggling("BR-01"));
}

#[tokio::test]
async fn second_toggle_for_same_branch_is_refused_while_pending() {
    let server = common::test_server().await;
    server.mock.stub_slow(
        Method::PATCH,
        "/branch/toggle/BR-01",
        json!(null),
        Duration::from_millis(200),
    );
    server.mock.stub_ok(Method::PATCH, "/branch/toggle/BR-02", json!(null));
    server.mock.stub_ok(Method::GET, "/branch/all", json!([]));
    let (api, _) = server.signed_in();
    let workflow = BranchWorkflow::new(api);

    let (first, second, other) = tokio::join!(
        workflow.toggle("BR-01"),
        workflow.toggle("BR-01"),
        workflow.toggle("BR-02"),
    );

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err().kind, AppErrorKind::Conflict);
    assert!(other.is_ok());
    assert_eq!(server.mock.count(Method::PATCH, "/branch/toggle/BR-01"), 1);
    assert!(!workflow.is_toggling("BR-01"));
}

use api_client::{AssignDialog, CaseBoard, CaseWorkflow};
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AuthSession, CaseFilter, CaseFilterType, CaseForm};
use std::time::Duration;

use crate::common;

fn filter() -> CaseFilter {
    CaseFilter {
        filter_type: CaseFilterType::InsuranceExpiry,
        from_date: "2026-03-01".into(),
        to_date: "2026-03-31".into(),
    }
}

#[tokio::test]
async fn assign_puts_client_then_reloads_with_same_filter() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::PUT, "/case/k1/assign", json!(null));
    server
        .mock
        .stub_ok(Method::GET, "/case/all", json!([common::case_json("k1", "assigned")]));
    let (api, _) = server.signed_in();
    let workflow = CaseWorkflow::new(api);

    let after = workflow.assign("k1", "d7", &filter()).await;

    assert!(after.outcome.is_ok());
    let cases = after.refreshed.unwrap();
    assert!(!cases[0].is_assignable());
    assert_eq!(server.mock.trail(), vec!["PUT /case/k1/assign", "GET /case/all"]);
    let requests = server.mock.requests();
    assert_eq!(requests[0].body, json!({ "clientId": "d7" }));
    assert!(requests[1]
        .query
        .as_deref()
        .is_some_and(|q| q.contains("filterType=insuranceExpiry")));
}

#[tokio::test]
async fn failed_assign_still_reloads() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::PUT,
        "/case/k1/assign",
        StatusCode::CONFLICT,
        json!({ "success": false, "message": "Dealer credit exhausted" }),
    );
    server
        .mock
        .stub_ok(Method::GET, "/case/all", json!([common::case_json("k1", "pending")]));
    let (api, _) = server.signed_in();
    let workflow = CaseWorkflow::new(api);

    let after = workflow.assign("k1", "d7", &filter()).await;

    let err = after.outcome.unwrap_err();
    assert_eq!(err.message, "Dealer credit exhausted");
    assert_eq!(after.refreshed.unwrap().len(), 1);
    assert_eq!(server.mock.count(Method::GET, "/case/all"), 1);
    assert!(!workflow.is_assigning("k1"));
}

#[tokio::test]
async fn failed_refresh_keeps_cases_on_screen() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::GET,
        "/case/all",
        json!([
            common::case_json("k1", "pending"),
            common::case_json("k2", "assigned"),
            common::case_json("k3", "created"),
        ]),
    );
    let (api, _) = server.signed_in();
    let workflow = CaseWorkflow::new(api);
    let mut board = CaseBoard::default();
    assert!(board.settle(workflow.reload(&filter()).await).is_none());

    server.mock.stub(
        Method::GET,
        "/case/all",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "success": false, "message": "Database unavailable" }),
    );
    board.begin();
    let err = board.settle(workflow.reload(&filter()).await).unwrap();

    assert_eq!(err.message, "Database unavailable");
    assert_eq!(board.cases.len(), 3);
    assert_eq!(board.cases[0].case_no, "CN-k1");
    assert!(board.failed_empty().is_none());
    assert_eq!(server.mock.count(Method::GET, "/case/all"), 2);
}

#[tokio::test]
async fn failed_assign_closes_dialog_and_keeps_rows() {
    let server = common::test_server().await;
    server
        .mock
        .stub_ok(Method::GET, "/case/all", json!([common::case_json("k1", "pending")]));
    let (api, _) = server.signed_in();
    let workflow = CaseWorkflow::new(api);
    let mut board = CaseBoard::default();
    board.settle(workflow.reload(&filter()).await);

    server.mock.stub(
        Method::PUT,
        "/case/k1/assign",
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "message": "Dealer not verified" }),
    );
    server.mock.stub(
        Method::GET,
        "/case/all",
        StatusCode::BAD_GATEWAY,
        json!({ "success": false }),
    );
    let mut dialog = AssignDialog::open("k1", "CN-k1");
    assert_eq!(dialog.title(), "Assign Case CN-k1 to Dealer");

    let after = workflow.assign("k1", "d7", &filter()).await;
    let report = board.finish_assign(&mut dialog, after);

    assert_eq!(report.outcome.unwrap_err().message, "Dealer not verified");
    assert!(report.refreshed.is_err());
    assert!(!dialog.is_open());
    assert_eq!(dialog.selected, None);
    assert_eq!(board.cases.len(), 1);
}

#[tokio::test]
async fn duplicate_assign_for_same_case_is_refused() {
    let server = common::test_server().await;
    server.mock.stub_slow(
        Method::PUT,
        "/case/k1/assign",
        json!(null),
        Duration::from_millis(200),
    );
    server.mock.stub_ok(Method::GET, "/case/all", json!([]));
    let (api, _) = server.signed_in();
    let workflow = CaseWorkflow::new(api);
    let filter = filter();

    let (first, second) = tokio::join!(
        workflow.assign("k1", "d7", &filter),
        workflow.assign("k1", "d8", &filter),
    );

    assert!(first.outcome.is_ok());
    assert_eq!(second.outcome.unwrap_err().kind, AppErrorKind::Conflict);
    assert_eq!(server.mock.count(Method::PUT, "/case/k1/assign"), 1);
}

#[tokio::test]
async fn dialog_searches_active_dealers_by_first_and_lowercase_last_name() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::GET,
        "/client/active",
        json!([
            { "id": "d1", "firstName": "Kiran", "lastName": "More", "lastname": "More" },
            { "id": "d2", "firstName": "Vikas", "lastName": "Shinde", "lastname": "Shinde" },
            { "id": "d3", "firstName": "Prakash", "lastName": "Shinde" },
        ]),
    );
    let (api, _) = server.signed_in();
    let dealers = CaseWorkflow::new(api).active_clients().await.unwrap();

    let mut dialog = AssignDialog::open("k1", "CN-k1");
    dialog.query = "shinde".into();
    let hits: Vec<_> = dialog.matches(&dealers).iter().map(|d| d.id.clone()).collect();

    assert_eq!(hits, vec!["d2".to_string()]);
    let chosen = dealers[1].clone();
    dialog.select(chosen);
    assert!(dialog.can_submit());
    assert_eq!(dialog.matches(&dealers).len(), 3);
}

#[tokio::test]
async fn create_case_sends_uppercased_vehicle_and_dates() {
    let server = common::test_server().await;
    server
        .mock
        .stub_ok(Method::POST, "/case/new", common::case_json("k9", "created"));
    let (api, _) = server.signed_in();
    let form = CaseForm {
        vehicle_no: " mh12ab1234 ".into(),
        application_date: "2026-03-02".into(),
        puc_expiry: "2026-09-30".into(),
        ..CaseForm::default()
    };

    let case = api.create_case(&form.to_request().unwrap()).await.unwrap();

    assert_eq!(case.case_no, "CN-k9");
    let body = &server.mock.requests()[0].body;
    assert_eq!(body["vehicleDetail"]["vehicleNo"], "MH12AB1234");
    assert_eq!(body["generalDetail"]["applicationDate"], "2026-03-02");
    assert_eq!(body["documentDetail"]["pucExpiry"], "2026-09-30");
    assert!(body["documentDetail"].get("taxExpiry").is_none());
}

#[tokio::test]
async fn rejected_create_uses_fallback_message() {
    let server = common::test_server().await;
    server
        .mock
        .stub(Method::POST, "/case/new", StatusCode::OK, json!({ "success": false }));
    let (api, _) = server.signed_in();
    let form = CaseForm {
        vehicle_no: "MH12AB1234".into(),
        application_date: "2026-03-02".into(),
        ..CaseForm::default()
    };

    let err = api.create_case(&form.to_request().unwrap()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Failed to create Case");
}

#[tokio::test]
async fn client_cases_come_from_the_client_endpoint() {
    let server = common::test_server().await;
    server
        .mock
        .stub_ok(Method::GET, "/case/client", json!([common::case_json("k4", "assigned")]));
    let (api, _) = server.client(Some(AuthSession {
        token: "tok-dealer".into(),
        user: common::user("CLIENT"),
    }));

    let cases = api.client_cases().await.unwrap();

    assert_eq!(cases[0].case_no, "CN-k4");
    assert_eq!(server.mock.trail(), vec!["GET /case/client"]);
}

#[tokio::test]
async fn case_ids_are_sent_as_one_encoded_segment() {
    let server = common::test_server().await;
    server
        .mock
        .stub_ok(Method::GET, "/case/a%2Fb%20c", common::case_json("a/b c", "created"));
    let (api, _) = server.signed_in();

    let case = api.get_case("a/b c").await.unwrap();

    assert_eq!(case.id, "a/b c");
    assert_eq!(server.mock.trail(), vec!["GET /case/a%2Fb%20c"]);
}

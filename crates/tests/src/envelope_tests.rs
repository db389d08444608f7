use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CaseFilter, CaseFilterType};

use crate::common;

#[tokio::test]
async fn falsy_success_becomes_rejected_with_server_message() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::GET,
        "/branch/all",
        StatusCode::OK,
        json!({ "success": false, "message": "Branch service paused" }),
    );
    let (api, _) = server.signed_in();

    let err = api.list_branches().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Branch service paused");
}

#[tokio::test]
async fn falsy_success_without_message_uses_fallback() {
    let server = common::test_server().await;
    server
        .mock
        .stub(Method::GET, "/branch/all", StatusCode::OK, json!({ "success": false }));
    let (api, _) = server.signed_in();

    let err = api.list_branches().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Failed to load branches");
}

#[tokio::test]
async fn error_status_maps_to_kind_and_keeps_message() {
    let server = common::test_server().await;
    server.mock.stub(
        Method::GET,
        "/case/c-404",
        StatusCode::NOT_FOUND,
        json!({ "success": false, "message": "No such case" }),
    );
    let (api, _) = server.signed_in();

    let err = api.get_case("c-404").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "No such case");
}

#[tokio::test]
async fn html_error_page_falls_back_to_status_text() {
    let server = common::test_server().await;
    server.mock.stub_raw(
        Method::GET,
        "/client/all",
        StatusCode::BAD_GATEWAY,
        "<html>upstream down</html>",
    );
    let (api, _) = server.signed_in();

    let err = api.list_clients().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Bad Gateway");
}

#[tokio::test]
async fn case_without_data_is_not_found() {
    let server = common::test_server().await;
    server
        .mock
        .stub(Method::GET, "/case/c-1", StatusCode::OK, json!({ "success": true }));
    let (api, _) = server.signed_in();

    let err = api.get_case("c-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn missing_list_data_reads_as_empty() {
    let server = common::test_server().await;
    server
        .mock
        .stub(Method::GET, "/case/employee", StatusCode::OK, json!({ "success": true }));
    let (api, _) = server.signed_in();

    let cases = api.employee_cases().await.unwrap();

    assert!(cases.is_empty());
}

#[tokio::test]
async fn case_filter_is_sent_as_query_params() {
    let server = common::test_server().await;
    server
        .mock
        .stub_ok(Method::GET, "/case/all", json!([common::case_json("c-1", "pending")]));
    let (api, _) = server.signed_in();
    let filter = CaseFilter {
        filter_type: CaseFilterType::PucExpiry,
        from_date: "2026-03-01".into(),
        to_date: "2026-03-17".into(),
    };

    let cases = api.list_cases(&filter).await.unwrap();

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].case_no, "CN-c-1");
    let requests = server.mock.requests();
    assert_eq!(
        requests[0].query.as_deref(),
        Some("filterType=pucExpiry&fromDate=2026-03-01&toDate=2026-03-17")
    );
}

#[tokio::test]
async fn incomplete_filter_never_reaches_the_server() {
    let server = common::test_server().await;
    let (api, _) = server.signed_in();
    let mut filter = CaseFilter::default_for(chrono::NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
    filter.to_date.clear();

    let err = api.list_cases(&filter).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("to_date"), Some("Date is required"));
    assert!(server.mock.requests().is_empty());
}

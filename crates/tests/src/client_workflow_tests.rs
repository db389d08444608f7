use api_client::{ClientWorkflow, RejectPrompt};
use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, Client, SignupForm, VerificationTab};
use std::time::Duration;

use crate::common;

fn groups(verified: Vec<Value>, unverified: Vec<Value>) -> Value {
    json!([
        { "isVerified": false, "clients": unverified },
        { "isVerified": true, "clients": verified },
    ])
}

#[tokio::test]
async fn reload_splits_groups_by_flag() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::GET,
        "/client/all",
        groups(
            vec![common::client_json("c1", "Sunil", true)],
            vec![
                common::client_json("c2", "Meena", false),
                common::client_json("c3", "Arjun", false),
            ],
        ),
    );
    let (api, _) = server.signed_in();

    let split = ClientWorkflow::new(api).reload().await.unwrap();

    assert_eq!(split.tab(VerificationTab::Verified).len(), 1);
    assert_eq!(split.tab(VerificationTab::Unverified).len(), 2);
    assert_eq!(split.verified[0].credit_limit_label(), "50000");
    assert_eq!(split.unverified[0].credit_limit_label(), "N/A");
}

#[tokio::test]
async fn missing_group_reads_as_empty_tab() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::GET,
        "/client/all",
        json!([{ "isVerified": false, "clients": [common::client_json("c2", "Meena", false)] }]),
    );
    let (api, _) = server.signed_in();

    let split = ClientWorkflow::new(api).reload().await.unwrap();

    assert!(split.verified.is_empty());
    assert_eq!(split.unverified.len(), 1);
}

#[tokio::test]
async fn verify_posts_terms_then_reloads() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::POST, "/client/verify/c2", json!(null));
    server.mock.stub_ok(
        Method::GET,
        "/client/all",
        groups(vec![common::client_json("c2", "Meena", true)], vec![]),
    );
    let (api, _) = server.signed_in();
    let workflow = ClientWorkflow::new(api);

    let split = workflow.verify("c2", "75000", "500").await.unwrap();

    assert_eq!(server.mock.trail(), vec!["POST /client/verify/c2", "GET /client/all"]);
    let body = &server.mock.requests()[0].body;
    assert_eq!(body["creditLimit"], 75000.0);
    assert_eq!(body["fixedPenalty"], 500.0);
    assert!(split.find("c2").is_some_and(|c| c.is_verified));
}

#[tokio::test]
async fn verify_with_bad_amounts_makes_no_request() {
    let server = common::test_server().await;
    let (api, _) = server.signed_in();
    let workflow = ClientWorkflow::new(api);

    let err = workflow.verify("c2", "", "ten").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("credit_limit"), Some("Credit limit is required"));
    assert_eq!(err.field_error("fixed_penalty"), Some("Fixed penalty must be a number"));
    assert!(server.mock.requests().is_empty());
}

#[tokio::test]
async fn reject_posts_then_reloads() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::POST, "/client/reject/c3", json!(null));
    server.mock.stub_ok(Method::GET, "/client/all", groups(vec![], vec![]));
    let (api, _) = server.signed_in();

    let split = ClientWorkflow::new(api).reject("c3").await.unwrap();

    assert_eq!(server.mock.trail(), vec!["POST /client/reject/c3", "GET /client/all"]);
    assert!(split.unverified.is_empty());
}

#[tokio::test]
async fn confirmed_reject_reaches_the_server_after_dialog_closes() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::POST, "/client/reject/c5", json!(null));
    server.mock.stub_ok(Method::GET, "/client/all", groups(vec![], vec![]));
    let (api, _) = server.signed_in();
    let workflow = ClientWorkflow::new(api);
    let client: Client = serde_json::from_value(common::client_json("c5", "Ganesh", false)).unwrap();

    let mut prompt = RejectPrompt::ask(client);
    // The confirm button closes the dialog before its handler runs.
    prompt.set_open(false);
    let target = prompt.confirm().expect("target survives the close");
    workflow.reject(&target.id).await.unwrap();

    assert_eq!(server.mock.count(Method::POST, "/client/reject/c5"), 1);
    assert!(!prompt.is_open());
}

#[tokio::test]
async fn reject_while_verify_pending_is_refused() {
    let server = common::test_server().await;
    server.mock.stub_slow(
        Method::POST,
        "/client/verify/c2",
        json!(null),
        Duration::from_millis(200),
    );
    server.mock.stub_ok(Method::GET, "/client/all", groups(vec![], vec![]));
    let (api, _) = server.signed_in();
    let workflow = ClientWorkflow::new(api);

    let (verified, rejected) = tokio::join!(
        workflow.verify("c2", "1000", "10"),
        workflow.reject("c2"),
    );

    assert!(verified.is_ok());
    assert_eq!(rejected.unwrap_err().kind, AppErrorKind::Conflict);
    assert_eq!(server.mock.count(Method::POST, "/client/reject/c2"), 0);
}

#[tokio::test]
async fn details_finds_client_in_either_group() {
    let server = common::test_server().await;
    server.mock.stub_ok(
        Method::GET,
        "/client/all",
        groups(vec![common::client_json("c1", "Sunil", true)], vec![]),
    );
    let (api, _) = server.signed_in();
    let workflow = ClientWorkflow::new(api);

    let client = workflow.details("c1").await.unwrap();
    let missing = workflow.details("zz").await.unwrap_err();

    assert_eq!(client.firm_name, "Sunil Motors");
    assert_eq!(missing.kind, AppErrorKind::NotFound);
}

fn signup_form() -> SignupForm {
    SignupForm {
        first_name: "Ganesh".into(),
        last_name: "Kulkarni".into(),
        email: "ganesh@kulkarniauto.in".into(),
        mobile_no: "9890011223".into(),
        password: "dealer123".into(),
        firm_name: "Kulkarni Auto".into(),
        address1: "Gala 7, MIDC".into(),
        address2: String::new(),
        city: "Aurangabad".into(),
        state: "Maharashtra".into(),
        pincode: "431001".into(),
    }
}

#[tokio::test]
async fn signup_posts_without_a_session() {
    let server = common::test_server().await;
    server.mock.stub_ok(Method::POST, "/client/signup", json!(null));
    let (api, _) = server.client(None);

    api.signup_client(&signup_form()).await.unwrap();

    let requests = server.mock.requests();
    assert_eq!(server.mock.trail(), vec!["POST /client/signup"]);
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[0].body["firmName"], "Kulkarni Auto");
    assert_eq!(requests[0].body["mobileNo"], "9890011223");
}

#[tokio::test]
async fn invalid_signup_makes_no_request() {
    let server = common::test_server().await;
    let (api, _) = server.client(None);
    let form = SignupForm {
        pincode: "4310".into(),
        ..signup_form()
    };

    let err = api.signup_client(&form).await.unwrap_err();

    assert_eq!(err.field_error("pincode"), Some("Enter a 6-digit pincode"));
    assert!(server.mock.requests().is_empty());
}

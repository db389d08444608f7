use api_client::{ApiClient, MemoryTokenStore};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use shared_types::{ApiSettings, AuthSession, AuthUser};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One request as the mock server saw it. `path` has the `/api` prefix stripped.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

/// Canned responses keyed by method and path, plus a log of every request.
#[derive(Clone, Default)]
pub struct MockApi {
    requests: Arc<Mutex<Vec<Recorded>>>,
    stubs: Arc<Mutex<HashMap<(Method, String), Stub>>>,
}

impl MockApi {
    pub fn stub_raw(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.insert(method, path, Stub {
            status,
            body: body.to_string(),
            delay: None,
        });
    }

    pub fn stub(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.stub_raw(method, path, status, &body.to_string());
    }

    /// `200` with `{ success: true, data }`.
    pub fn stub_ok(&self, method: Method, path: &str, data: Value) {
        self.stub(method, path, StatusCode::OK, json!({ "success": true, "data": data }));
    }

    /// Like `stub_ok`, but the response is held back for `delay`.
    pub fn stub_slow(&self, method: Method, path: &str, data: Value, delay: Duration) {
        self.insert(method, path, Stub {
            status: StatusCode::OK,
            body: json!({ "success": true, "data": data }).to_string(),
            delay: Some(delay),
        });
    }

    fn insert(&self, method: Method, path: &str, stub: Stub) {
        self.stubs
            .lock()
            .unwrap()
            .insert((method, path.to_string()), stub);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// `"METHOD /path"` for every request, in arrival order.
    pub fn trail(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

async fn handle(
    State(mock): State<MockApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix("/api")
        .unwrap_or(uri.path())
        .to_string();
    mock.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let stub = mock.stubs.lock().unwrap().get(&(method, path)).cloned();
    match stub {
        Some(stub) => {
            if let Some(delay) = stub.delay {
                tokio::time::sleep(delay).await;
            }
            (
                stub.status,
                [(header::CONTENT_TYPE, "application/json")],
                stub.body,
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "success": false, "message": "No route" }).to_string(),
        )
            .into_response(),
    }
}

/// A running mock server and the API base URL pointing at it.
pub struct TestServer {
    pub mock: MockApi,
    pub base_url: String,
}

impl TestServer {
    /// Client with its own token store, optionally signed in.
    pub fn client(&self, session: Option<AuthSession>) -> (ApiClient, MemoryTokenStore) {
        let store = match session {
            Some(s) => MemoryTokenStore::with_session(s),
            None => MemoryTokenStore::default(),
        };
        let settings = ApiSettings {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        };
        let api = ApiClient::new(&settings, Arc::new(store.clone())).expect("client builds");
        (api, store)
    }

    pub fn signed_in(&self) -> (ApiClient, MemoryTokenStore) {
        self.client(Some(admin_session()))
    }
}

/// Start a mock API on an ephemeral port.
pub async fn test_server() -> TestServer {
    let mock = MockApi::default();
    let app = Router::new().fallback(handle).with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    TestServer {
        mock,
        base_url: format!("http://{addr}/api"),
    }
}

pub fn user(role: &str) -> AuthUser {
    AuthUser {
        id: "u-1".into(),
        first_name: "Anita".into(),
        last_name: "Deshpande".into(),
        email: "anita@casedesk.in".into(),
        role_name: role.into(),
        branch_code: Some("BR-01".into()),
        employee_code: None,
    }
}

pub fn admin_session() -> AuthSession {
    AuthSession {
        token: "tok-admin".into(),
        user: user("SUPERADMIN"),
    }
}

pub fn branch_json(code: &str, name: &str, active: bool) -> Value {
    json!({
        "id": format!("id-{code}"),
        "branchCode": code,
        "name": name,
        "address1": "12 FC Road",
        "address2": "Shivajinagar",
        "city": "Pune",
        "state": "Maharashtra",
        "pincode": "411005",
        "isActive": active,
    })
}

pub fn client_json(id: &str, first: &str, verified: bool) -> Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": "Patil",
        "address1": "Plot 4",
        "address2": "MIDC",
        "city": "Nashik",
        "state": "Maharashtra",
        "pincode": "422010",
        "email": format!("{}@dealer.in", first.to_lowercase()),
        "mobileNo": "9800000000",
        "firmName": format!("{first} Motors"),
        "isVerified": verified,
        "creditLimit": if verified { json!(50000) } else { Value::Null },
        "users": [],
    })
}

pub fn case_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "CaseNo": format!("CN-{id}"),
        "vehicleDetail": { "vehicleNo": "MH12AB1234" },
        "createdBy": { "firstName": "Rahul", "lastName": "Joshi", "employeeCode": "E-07" },
        "status": status,
        "generalDetail": { "applicationDate": "2026-03-02", "appointmentDate": "2026-03-20" },
    })
}

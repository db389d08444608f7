use reqwest::StatusCode;
use shared_types::{ApiEnvelope, AppError};

/// Convert a transport-level `reqwest::Error` into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        return AppError::network("The server took too long to respond");
    }
    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return AppError::network("Could not reach the server");
    }
    if err.is_decode() {
        return AppError::decode(err.to_string());
    }
    AppError::network(err.to_string())
}

/// Build the error for a non-2xx response.
///
/// Uses the envelope `message` when the body is JSON carrying one, otherwise
/// the status text.
pub fn status_to_app_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|env| env.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status_text(status));
    AppError::from_status(status.as_u16(), message)
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiEnvelope, ApiSettings, AppError, AuthSession};
use std::sync::Arc;

use crate::error_convert::{status_to_app_error, ReqwestErrorExt};
use crate::token::TokenStore;

/// Thin wrapper over `reqwest::Client` that speaks the API's envelope.
///
/// Every request carries `Authorization: Bearer <token>` when a session is
/// stored. A 401 on any call clears the stored session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(settings.timeout_secs));
        let http = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: settings.normalized_base_url().to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Option<AuthSession> {
        self.tokens.load()
    }

    pub(crate) fn store_session(&self, session: &AuthSession) {
        self.tokens.save(session);
    }

    pub fn clear_session(&self) {
        self.tokens.clear();
    }

    /// Base URL plus `segments`, each percent-encoded as one path segment.
    fn url(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::internal(format!("Invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| AppError::internal("API base URL cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, AppError> {
        let builder = self.http.request(method, self.url(segments)?);
        Ok(match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send and unwrap the envelope. `fallback` is the message used when the
    /// server rejects without saying why.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        let response = builder.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.into_app_error())?;

        if !status.is_success() {
            let err = status_to_app_error(status, &body);
            if err.is_unauthorized() {
                tracing::warn!("Session rejected by server, signing out");
                self.tokens.clear();
            }
            return Err(err);
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected response: {e}")))?;
        envelope.into_result(fallback)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::GET, path)?, fallback).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &[&str],
        query: &Q,
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::GET, path)?.query(query), fallback)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::POST, path)?.json(body), fallback)
            .await
    }

    /// POST with no request body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &[&str],
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::POST, path)?, fallback).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::PUT, path)?.json(body), fallback)
            .await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &[&str],
        fallback: &str,
    ) -> Result<Option<T>, AppError> {
        self.send(self.request(Method::PATCH, path)?, fallback).await
    }
}

/// Required `data` for endpoints that always return an entity.
pub(crate) fn require<T>(data: Option<T>, what: &str) -> Result<T, AppError> {
    data.ok_or_else(|| AppError::decode(format!("Response carried no {what}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    fn client(base: &str) -> ApiClient {
        let settings = ApiSettings {
            base_url: base.to_string(),
            ..ApiSettings::default()
        };
        ApiClient::new(&settings, Arc::new(MemoryTokenStore::default())).unwrap()
    }

    #[test]
    fn urls_join_with_single_slash() {
        let api = client("http://localhost:5000/api/");
        assert_eq!(
            api.url(&["branch", "all"]).unwrap().as_str(),
            "http://localhost:5000/api/branch/all"
        );
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        let api = client("http://localhost:5000/api");
        assert_eq!(
            api.url(&["branch", "toggle", "BR 01/A?x"]).unwrap().as_str(),
            "http://localhost:5000/api/branch/toggle/BR%2001%2FA%3Fx"
        );
    }

    #[test]
    fn require_reports_missing_data() {
        let err = require::<u8>(None, "case").unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Decode);
        assert_eq!(require(Some(3u8), "x").unwrap(), 3);
    }
}

use shared_types::{AppError, AuthSession, LoginRequest};
use validator::Validate;

use crate::http::{require, ApiClient};

impl ApiClient {
    /// Sign in and persist the returned session.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthSession, AppError> {
        req.validate()?;
        let session: AuthSession =
            require(self.post(&["auth", "login"], req, "Login failed").await?, "session")?;
        if session.user.role().is_none() {
            tracing::warn!(role = %session.user.role_name, "Unknown role, refusing session");
            return Err(AppError::forbidden("This account has no access to the admin panel"));
        }
        self.store_session(&session);
        tracing::info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        self.clear_session();
        tracing::info!("Signed out");
    }
}

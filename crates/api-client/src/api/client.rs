use shared_types::{ActiveClient, AppError, ClientGroup, SignupForm, VerifyClientRequest};

use crate::http::ApiClient;

impl ApiClient {
    /// Clients grouped by verification flag.
    #[tracing::instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<ClientGroup>, AppError> {
        Ok(self
            .get(&["client", "all"], "Failed to load clients")
            .await?
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn verify_client(&self, id: &str, req: &VerifyClientRequest) -> Result<(), AppError> {
        self.post::<serde_json::Value, _>(
            &["client", "verify", id],
            req,
            "Failed to verify client",
        )
        .await?;
        tracing::info!("Client verified");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn reject_client(&self, id: &str) -> Result<(), AppError> {
        self.post_empty::<serde_json::Value>(
            &["client", "reject", id],
            "Failed to reject client",
        )
        .await?;
        tracing::info!("Client rejected");
        Ok(())
    }

    /// Dealers a case can be assigned to.
    #[tracing::instrument(skip(self))]
    pub async fn active_clients(&self) -> Result<Vec<ActiveClient>, AppError> {
        Ok(self
            .get(&["client", "active"], "Failed to load dealers")
            .await?
            .unwrap_or_default())
    }

    /// Dealer self-registration. Works without a session; the new account
    /// waits in the unverified list until an admin reviews it.
    #[tracing::instrument(skip(self, form), fields(email = %form.email.trim()))]
    pub async fn signup_client(&self, form: &SignupForm) -> Result<(), AppError> {
        let req = form.to_request()?;
        self.post::<serde_json::Value, _>(&["client", "signup"], &req, "Sign up failed")
            .await?;
        tracing::info!("Dealer registered");
        Ok(())
    }
}

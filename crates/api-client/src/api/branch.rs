use shared_types::{AppError, Branch, CreateBranchRequest};

use crate::http::{require, ApiClient};

impl ApiClient {
    /// Validates locally first; an invalid form never reaches the network.
    #[tracing::instrument(skip(self, req), fields(name = %req.name))]
    pub async fn create_branch(&self, req: &CreateBranchRequest) -> Result<Branch, AppError> {
        let req = req.check()?;
        let branch = require(
            self.post(&["branch", "new"], &req, "Failed to create branch").await?,
            "branch",
        )?;
        tracing::info!("Branch created");
        Ok(branch)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_branches(&self) -> Result<Vec<Branch>, AppError> {
        Ok(self
            .get(&["branch", "all"], "Failed to load branches")
            .await?
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    pub async fn toggle_branch(&self, branch_code: &str) -> Result<(), AppError> {
        self.patch::<serde_json::Value>(
            &["branch", "toggle", branch_code],
            "Failed to update branch status",
        )
        .await?;
        Ok(())
    }
}

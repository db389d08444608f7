use shared_types::{AppError, AssignCaseRequest, Case, CaseFilter, CreateCaseRequest};

use crate::http::{require, ApiClient};

impl ApiClient {
    #[tracing::instrument(skip(self, req), fields(vehicle_no = %req.vehicle_detail.vehicle_no))]
    pub async fn create_case(&self, req: &CreateCaseRequest) -> Result<Case, AppError> {
        let case: Case = require(self.post(&["case", "new"], req, "Failed to create Case").await?, "case")?;
        tracing::info!(case_id = %case.id, "Case created");
        Ok(case)
    }

    /// Cases matching `filter`. Both dates are checked before the request is made.
    #[tracing::instrument(skip(self), fields(filter_type = filter.filter_type.as_str()))]
    pub async fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>, AppError> {
        filter.check()?;
        Ok(self
            .get_with_query(&["case", "all"], &filter.query(), "Failed to load cases")
            .await?
            .unwrap_or_default())
    }

    /// Cases created by the signed-in employee.
    #[tracing::instrument(skip(self))]
    pub async fn employee_cases(&self) -> Result<Vec<Case>, AppError> {
        Ok(self
            .get(&["case", "employee"], "Failed to load cases")
            .await?
            .unwrap_or_default())
    }

    /// Cases assigned to the signed-in dealer.
    #[tracing::instrument(skip(self))]
    pub async fn client_cases(&self) -> Result<Vec<Case>, AppError> {
        Ok(self
            .get(&["case", "client"], "Failed to load cases")
            .await?
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_case(&self, id: &str) -> Result<Case, AppError> {
        let case = self.get(&["case", id], "Case not found").await?;
        case.ok_or_else(|| AppError::not_found("Case not found"))
    }

    #[tracing::instrument(skip(self))]
    pub async fn assign_case(&self, case_id: &str, client_id: &str) -> Result<(), AppError> {
        let body = AssignCaseRequest {
            client_id: client_id.to_string(),
        };
        self.put::<serde_json::Value, _>(
            &["case", case_id, "assign"],
            &body,
            "Failed to assign case",
        )
        .await?;
        tracing::info!("Case assigned");
        Ok(())
    }
}

use shared_types::{split_by_verification, AppError, Client, ClientSplit, VerifyClientRequest};

use crate::{ApiClient, InFlight};

/// Client verification. Verify and reject share one in-flight key per client.
#[derive(Clone)]
pub struct ClientWorkflow {
    api: ApiClient,
    in_flight: InFlight,
}

impl ClientWorkflow {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            in_flight: InFlight::default(),
        }
    }

    pub async fn reload(&self) -> Result<ClientSplit, AppError> {
        let groups = self.api.list_clients().await?;
        Ok(split_by_verification(&groups))
    }

    /// Verify with the raw dialog inputs. Bad input fails before any request.
    pub async fn verify(
        &self,
        client_id: &str,
        credit_limit: &str,
        fixed_penalty: &str,
    ) -> Result<ClientSplit, AppError> {
        let req = VerifyClientRequest::parse(credit_limit, fixed_penalty)?;
        let _guard = self.in_flight.begin(client_id)?;
        self.api.verify_client(client_id, &req).await?;
        self.reload().await
    }

    pub async fn reject(&self, client_id: &str) -> Result<ClientSplit, AppError> {
        let _guard = self.in_flight.begin(client_id)?;
        self.api.reject_client(client_id).await?;
        self.reload().await
    }

    /// Full record of a single client for the detail page.
    pub async fn details(&self, client_id: &str) -> Result<Client, AppError> {
        let split = self.reload().await?;
        split
            .find(client_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Client not found"))
    }

    pub fn is_busy(&self, client_id: &str) -> bool {
        self.in_flight.is_pending(client_id)
    }
}

/// Reject confirmation for one client.
///
/// Closing the dialog does not drop the target, so a confirm that fires after
/// the close still knows which client it was for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RejectPrompt {
    target: Option<Client>,
    open: bool,
}

impl RejectPrompt {
    pub fn ask(client: Client) -> Self {
        Self {
            target: Some(client),
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open && self.target.is_some();
    }

    pub fn target(&self) -> Option<&Client> {
        self.target.as_ref()
    }

    /// Hand over the client to reject and reset the prompt.
    pub fn confirm(&mut self) -> Option<Client> {
        self.open = false;
        self.target.take()
    }
}

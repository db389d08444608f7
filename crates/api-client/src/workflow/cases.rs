use shared_types::{search_dealers, ActiveClient, AppError, Case, CaseFilter};

use crate::{ApiClient, InFlight, RequestState};

/// Result of a mutation whose list is refreshed whether or not it succeeded.
#[derive(Debug)]
pub struct AfterMutation<T> {
    pub outcome: Result<(), AppError>,
    pub refreshed: Result<T, AppError>,
}

/// Case filtering and assignment. Assignments are serialized per case id.
#[derive(Clone)]
pub struct CaseWorkflow {
    api: ApiClient,
    in_flight: InFlight,
}

impl CaseWorkflow {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            in_flight: InFlight::default(),
        }
    }

    /// Fetch the cases for `filter`; the caller replaces its displayed set with the result.
    pub async fn reload(&self, filter: &CaseFilter) -> Result<Vec<Case>, AppError> {
        self.api.list_cases(filter).await
    }

    pub async fn active_clients(&self) -> Result<Vec<ActiveClient>, AppError> {
        self.api.active_clients().await
    }

    /// Assign `case_id` to `client_id`, then reload with `filter`.
    ///
    /// The reload runs after the assignment settles, failed or not. A duplicate
    /// assignment for the same case is refused without touching the server.
    pub async fn assign(
        &self,
        case_id: &str,
        client_id: &str,
        filter: &CaseFilter,
    ) -> AfterMutation<Vec<Case>> {
        let outcome = match self.in_flight.begin(case_id) {
            Ok(_guard) => self.api.assign_case(case_id, client_id).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            tracing::error!(case_id, error = %e, "Assignment failed");
        }
        AfterMutation {
            outcome,
            refreshed: self.reload(filter).await,
        }
    }

    pub fn is_assigning(&self, case_id: &str) -> bool {
        self.in_flight.is_pending(case_id)
    }
}

/// Cases on screen plus the state of the latest fetch.
///
/// A failed fetch leaves the rows alone; only a successful one replaces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseBoard {
    pub cases: Vec<Case>,
    pub fetch: RequestState<()>,
}

impl CaseBoard {
    pub fn begin(&mut self) {
        self.fetch = RequestState::Loading;
    }

    /// Apply a fetch result, returning the error for the caller to report.
    pub fn settle(&mut self, result: Result<Vec<Case>, AppError>) -> Option<AppError> {
        match result {
            Ok(cases) => {
                self.cases = cases;
                self.fetch = RequestState::Ready(());
                None
            }
            Err(e) => {
                self.fetch = RequestState::Failed(e.clone());
                Some(e)
            }
        }
    }

    /// Nothing has loaded yet and the last attempt failed.
    pub fn failed_empty(&self) -> Option<&AppError> {
        self.fetch.error().filter(|_| self.cases.is_empty())
    }

    /// Fold a finished assignment in. The dialog closes either way; the
    /// returned `refreshed` is `Ok` when the rows were replaced.
    pub fn finish_assign(
        &mut self,
        dialog: &mut AssignDialog,
        after: AfterMutation<Vec<Case>>,
    ) -> AfterMutation<()> {
        *dialog = AssignDialog::default();
        let refreshed = match self.settle(after.refreshed) {
            None => Ok(()),
            Some(e) => Err(e),
        };
        AfterMutation {
            outcome: after.outcome,
            refreshed,
        }
    }
}

/// State of the assignment dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignDialog {
    pub case_id: Option<String>,
    pub case_no: String,
    pub query: String,
    pub selected: Option<ActiveClient>,
}

impl AssignDialog {
    pub fn open(case_id: impl Into<String>, case_no: impl Into<String>) -> Self {
        Self {
            case_id: Some(case_id.into()),
            case_no: case_no.into(),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.case_id.is_some()
    }

    pub fn title(&self) -> String {
        format!("Assign Case {} to Dealer", self.case_no)
    }

    /// Choosing a dealer clears the search text.
    pub fn select(&mut self, client: ActiveClient) {
        self.selected = Some(client);
        self.query.clear();
    }

    pub fn can_submit(&self) -> bool {
        self.case_id.is_some() && self.selected.is_some()
    }

    pub fn matches<'a>(&self, clients: &'a [ActiveClient]) -> Vec<&'a ActiveClient> {
        search_dealers(clients, &self.query)
    }
}

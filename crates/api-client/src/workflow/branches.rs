use shared_types::{AppError, Branch, CreateBranchRequest, Pager, BRANCH_PAGE_SIZE};
use std::collections::HashMap;

use crate::{ApiClient, InFlight};

/// Branch operations. Toggles are serialized per branch code.
#[derive(Clone)]
pub struct BranchWorkflow {
    api: ApiClient,
    in_flight: InFlight,
}

impl BranchWorkflow {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            in_flight: InFlight::default(),
        }
    }

    pub async fn reload(&self) -> Result<Vec<Branch>, AppError> {
        self.api.list_branches().await
    }

    pub async fn create(&self, req: &CreateBranchRequest) -> Result<Branch, AppError> {
        self.api.create_branch(req).await
    }

    /// Flip the active flag of `branch_code`, then return the refreshed list.
    pub async fn toggle(&self, branch_code: &str) -> Result<Vec<Branch>, AppError> {
        let _guard = self.in_flight.begin(branch_code)?;
        self.api.toggle_branch(branch_code).await?;
        self.reload().await
    }

    pub fn is_toggling(&self, branch_code: &str) -> bool {
        self.in_flight.is_pending(branch_code)
    }
}

/// View state of the branch page: the loaded list, its pager and the create dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchBoard {
    pub branches: Vec<Branch>,
    pub pager: Pager,
    pub dialog_open: bool,
    pub form: CreateBranchRequest,
    pub field_errors: HashMap<String, String>,
}

impl Default for BranchBoard {
    fn default() -> Self {
        Self {
            branches: Vec::new(),
            pager: Pager::new(BRANCH_PAGE_SIZE),
            dialog_open: false,
            form: CreateBranchRequest::default(),
            field_errors: HashMap::new(),
        }
    }
}

impl BranchBoard {
    /// Replace the list, keeping the current page when it still exists.
    pub fn replace(&mut self, branches: Vec<Branch>) {
        self.branches = branches;
        let last = self.pager.total_pages(self.branches.len()).max(1);
        self.pager.page = self.pager.page.clamp(1, last);
    }

    pub fn visible(&self) -> &[Branch] {
        self.pager.slice(&self.branches)
    }

    /// Never below one, so an empty list still shows a page.
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.branches.len()).max(1)
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.branches.len());
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close and discard whatever was typed.
    pub fn cancel_dialog(&mut self) {
        self.dialog_open = false;
        self.form = CreateBranchRequest::default();
        self.field_errors.clear();
    }

    /// Check the form; on failure the errors are kept for inline display.
    pub fn checked_form(&mut self) -> Option<CreateBranchRequest> {
        match self.form.check() {
            Ok(req) => {
                self.field_errors.clear();
                Some(req)
            }
            Err(e) => {
                self.field_errors = e.field_errors;
                None
            }
        }
    }

    pub fn field_error(&self, name: &str) -> String {
        self.field_errors.get(name).cloned().unwrap_or_default()
    }

    /// A create succeeded: show the new branch, clear the form and close the dialog.
    pub fn on_created(&mut self, branch: Branch) {
        self.branches.push(branch);
        self.cancel_dialog();
    }
}

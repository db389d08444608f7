use super::status_variant;
use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_optional_date;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Case;
use shared_ui::{
    use_toast, Badge, Button, ButtonVariant, DataTable, DataTableCell, DataTableRow, PageHeader,
    Skeleton,
};

const COLUMNS: [&str; 6] = [
    "Case No",
    "Vehicle No",
    "Status",
    "Application Date",
    "Assigned To",
    "",
];

/// Whose cases a [`OwnCasesPage`] lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaseScope {
    /// Cases the signed-in employee created.
    Employee,
    /// Cases assigned to the signed-in dealer.
    Client,
}

impl CaseScope {
    pub fn detail_route(self, case: &Case) -> Route {
        let (case_no, id) = (case.case_no.clone(), case.id.clone());
        match self {
            CaseScope::Employee => Route::EmployeeCaseDetail { case_no, id },
            CaseScope::Client => Route::ClientCaseDetail { case_no, id },
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            CaseScope::Employee => "You have not created any cases yet",
            CaseScope::Client => "No cases have been assigned to you yet",
        }
    }

    /// Only employees open cases from this page.
    fn create_route(self) -> Option<Route> {
        match self {
            CaseScope::Employee => Some(Route::EmployeeCaseCreate {}),
            CaseScope::Client => None,
        }
    }
}

/// Read-only list of the signed-in user's own cases.
#[component]
pub fn OwnCasesPage(scope: CaseScope) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();

    let cases = use_resource(move || {
        let api = api.clone();
        async move {
            let result = match scope {
                CaseScope::Employee => api.employee_cases().await,
                CaseScope::Client => api.client_cases().await,
            };
            if let Err(e) = &result {
                notify::api_error(toast, &mut auth, e);
            }
            result
        }
    });

    let body = match &*cases.read() {
        None => rsx! { Skeleton { rows: 6 } },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                p { "{e.friendly_message()}" }
            }
        },
        Some(Ok(list)) => rsx! {
            DataTable {
                columns: COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                is_empty: list.is_empty(),
                empty_message: scope.empty_message(),
                for case in list.iter() {
                    DataTableRow { key: "{case.id}",
                        DataTableCell { "{case.case_no}" }
                        DataTableCell { "{case.vehicle_detail.vehicle_no}" }
                        DataTableCell {
                            Badge { variant: status_variant(&case.status), "{case.status}" }
                        }
                        DataTableCell {
                            {format_optional_date(case.general_detail.application_date.as_deref())}
                        }
                        DataTableCell {
                            {case.assignee_name().unwrap_or_else(|| "-".to_string())}
                        }
                        DataTableCell {
                            Link {
                                to: scope.detail_route(case),
                                class: "table-link",
                                "View"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "My Cases",
                if let Some(route) = scope.create_route() {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(route.clone());
                        },
                        "New Case"
                    }
                }
            }
            {body}
        }
    }
}

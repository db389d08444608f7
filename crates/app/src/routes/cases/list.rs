use super::assign_dialog::AssignCaseDialog;
use super::status_variant;
use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_optional_date;
use crate::notify;
use crate::routes::Route;
use api_client::{AssignDialog, CaseBoard, CaseWorkflow, RequestState};
use dioxus::prelude::*;
use shared_types::{ActiveClient, AppErrorKind, Case, CaseFilter, CaseFilterType};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, DataTable, DataTableCell, DataTableRow,
    PageHeader, SelectField, SelectOption, Skeleton, TextField,
};
use std::collections::HashMap;

const COLUMNS: [&str; 7] = [
    "Case No",
    "Vehicle No",
    "Created By",
    "Assigned To",
    "Status",
    "Appointment Date",
    "Actions",
];

/// Filterable list of every case, with dealer assignment.
///
/// `kind` is the dashboard hint (`PUC`, `TAX`, ...) that preselects the filter field.
#[component]
pub fn CaseFilterPage(kind: String) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let workflow = use_hook(|| CaseWorkflow::new(api));

    let mut filter = use_signal(|| CaseFilter {
        filter_type: CaseFilterType::from_hint(&kind),
        ..CaseFilter::default_for(chrono::Local::now().date_naive())
    });
    let mut filter_errors = use_signal(HashMap::<String, String>::new);
    let mut board = use_signal(CaseBoard::default);
    let mut dealers = use_signal(RequestState::<Vec<ActiveClient>>::default);
    let mut dialog = use_signal(AssignDialog::default);
    let mut assigning = use_signal(|| false);

    let reload = use_callback({
        let workflow = workflow.clone();
        move |()| {
            let current = filter.read().clone();
            if let Err(e) = current.check() {
                filter_errors.set(e.field_errors);
                return;
            }
            filter_errors.set(HashMap::new());
            let workflow = workflow.clone();
            spawn(async move {
                board.write().begin();
                let result = workflow.reload(&current).await;
                let failed = board.write().settle(result);
                if let Some(e) = failed {
                    if e.kind != AppErrorKind::ValidationError {
                        notify::api_error(toast, &mut auth, &e);
                    }
                }
            });
        }
    });

    use_hook(move || reload.call(()));

    let open_assign = {
        let workflow = workflow.clone();
        move |(case_id, case_no): (String, String)| {
            dialog.set(AssignDialog::open(case_id, case_no));
            if dealers.read().value().is_some() || dealers.read().is_loading() {
                return;
            }
            let workflow = workflow.clone();
            spawn(async move {
                dealers.set(RequestState::Loading);
                let result = workflow.active_clients().await;
                if let Err(e) = &result {
                    notify::api_error(toast, &mut auth, e);
                }
                dealers.set(result.into());
            });
        }
    };

    let submit_assign = {
        let workflow = workflow.clone();
        move |(case_id, client_id): (String, String)| {
            if workflow.is_assigning(&case_id) {
                return;
            }
            let current = filter.read().clone();
            let workflow = workflow.clone();
            spawn(async move {
                assigning.set(true);
                let after = workflow.assign(&case_id, &client_id, &current).await;
                let report = board.write().finish_assign(&mut dialog.write(), after);
                match report.outcome {
                    Ok(()) => notify::success(toast, "Case assigned successfully"),
                    Err(e) => notify::api_error(toast, &mut auth, &e),
                }
                if let Err(e) = report.refreshed {
                    notify::api_error(toast, &mut auth, &e);
                }
                assigning.set(false);
            });
        }
    };

    let type_options: Vec<SelectOption> = CaseFilterType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();
    let filter_error = move |key: &str| filter_errors.read().get(key).cloned().unwrap_or_default();
    let current = filter.read().clone();

    let snapshot = board.read().clone();
    let table = if let Some(e) = snapshot.failed_empty() {
        rsx! {
            div { class: "empty-state",
                p { "{e.friendly_message()}" }
                Button { variant: ButtonVariant::Outline, onclick: move |_| reload.call(()), "Retry" }
            }
        }
    } else if snapshot.fetch.is_loading() && snapshot.cases.is_empty() {
        rsx! { Skeleton { rows: 6 } }
    } else {
        let notice = if snapshot.fetch.is_loading() {
            Some("Refreshing...".to_string())
        } else {
            snapshot
                .fetch
                .error()
                .map(|e| format!("Showing the last loaded results. {}", e.friendly_message()))
        };
        rsx! {
            if let Some(notice) = notice {
                p { class: "muted table-notice", "{notice}" }
            }
            DataTable {
                columns: COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                is_empty: snapshot.cases.is_empty(),
                empty_message: "No cases in this range",
                for case in snapshot.cases.iter().cloned() {
                    CaseRow {
                        key: "{case.id}",
                        case,
                        on_assign: open_assign.clone(),
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "All Cases", subtitle: "Filter by date field and range",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(Route::AdminCaseCreate {});
                    },
                    "New Case"
                }
            }

            form {
                class: "filter-bar",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    reload.call(());
                },
                SelectField {
                    label: "Filter by",
                    value: current.filter_type.as_str(),
                    options: type_options,
                    on_change: move |v: String| {
                        if let Some(t) = CaseFilterType::parse(&v) {
                            filter.write().filter_type = t;
                        }
                    },
                }
                TextField {
                    label: "From",
                    input_type: "date",
                    value: current.from_date.clone(),
                    error: filter_error("from_date"),
                    on_input: move |v: String| filter.write().from_date = v,
                }
                TextField {
                    label: "To",
                    input_type: "date",
                    value: current.to_date.clone(),
                    error: filter_error("to_date"),
                    on_input: move |v: String| filter.write().to_date = v,
                }
                Button { variant: ButtonVariant::Primary, button_type: "submit", "Apply" }
            }

            {table}

            AssignCaseDialog {
                dialog,
                dealers,
                busy: assigning(),
                on_submit: submit_assign,
            }
        }
    }
}

#[component]
fn CaseRow(case: Case, on_assign: EventHandler<(String, String)>) -> Element {
    let appointment = format_optional_date(case.general_detail.appointment_date.as_deref());
    let assignee = case.assignee_name().unwrap_or_else(|| "-".to_string());
    let target = (case.id.clone(), case.case_no.clone());

    rsx! {
        DataTableRow {
            DataTableCell { "{case.case_no}" }
            DataTableCell { "{case.vehicle_detail.vehicle_no}" }
            DataTableCell { "{case.creator_name()}" }
            DataTableCell { "{assignee}" }
            DataTableCell {
                Badge { variant: status_variant(&case.status), "{case.status}" }
            }
            DataTableCell { "{appointment}" }
            DataTableCell {
                div { class: "row-actions",
                    Link {
                        to: Route::AdminCaseDetail { case_no: case.case_no.clone(), id: case.id.clone() },
                        class: "table-link",
                        "View"
                    }
                    if case.is_assignable() {
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_| on_assign.call(target.clone()),
                            "Assign"
                        }
                    }
                }
            }
        }
    }
}

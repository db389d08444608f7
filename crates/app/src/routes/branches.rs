use crate::auth::{use_api, use_auth};
use crate::notify;
use api_client::{BranchWorkflow, BranchBoard, RequestState};
use dioxus::prelude::*;
use shared_types::{field_placeholder, AppErrorKind, CreateBranchRequest, INDIAN_STATES};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableCell,
    DataTableRow, Modal, ModalActions, PageHeader, Pagination, SelectField, SelectOption,
    Skeleton, TextField, ToggleSwitch,
};

const COLUMNS: [&str; 4] = ["Branch Code", "Name", "Address", "Status"];

/// Branch list with a create dialog and per-row active toggles.
#[component]
pub fn BranchesPage() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let workflow = use_hook(|| BranchWorkflow::new(api));
    let mut board = use_signal(BranchBoard::default);
    let mut fetch = use_signal(RequestState::<()>::default);

    let mut saving = use_signal(|| false);

    let reload = use_callback({
        let workflow = workflow.clone();
        move |()| {
            let workflow = workflow.clone();
            spawn(async move {
                fetch.set(RequestState::Loading);
                match workflow.reload().await {
                    Ok(list) => {
                        board.write().replace(list);
                        fetch.set(RequestState::Ready(()));
                    }
                    Err(e) => {
                        notify::api_error(toast, &mut auth, &e);
                        fetch.set(RequestState::Failed(e));
                    }
                }
            });
        }
    });

    use_hook(move || reload.call(()));

    let submit = {
        let workflow = workflow.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(req) = board.write().checked_form() else {
                return;
            };
            let workflow = workflow.clone();
            spawn(async move {
                saving.set(true);
                match workflow.create(&req).await {
                    Ok(branch) => {
                        board.write().on_created(branch);
                        notify::success(toast, "Branch created successfully");
                        reload.call(());
                    }
                    Err(e) if e.kind == AppErrorKind::ValidationError => {
                        board.write().field_errors = e.field_errors;
                    }
                    Err(e) => notify::api_error(toast, &mut auth, &e),
                }
                saving.set(false);
            });
        }
    };

    let state_options: Vec<SelectOption> = INDIAN_STATES
        .iter()
        .map(|s| SelectOption::new(*s, *s))
        .collect();
    let snapshot = board.read().clone();
    let loading = fetch.read().is_loading() && snapshot.branches.is_empty();

    rsx! {
        div { class: "container",
            PageHeader { title: "Branches", subtitle: "Create branches and switch them on or off",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| board.write().open_dialog(),
                    "Add Branch"
                }
            }

            if loading {
                Skeleton { rows: 5 }
            } else {
                DataTable {
                    columns: COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                    is_empty: snapshot.branches.is_empty(),
                    empty_message: "No branches yet",
                    for branch in snapshot.visible().iter().cloned() {
                        BranchRow { key: "{branch.row_key()}", branch, workflow: workflow.clone(), board }
                    }
                }
                Pagination {
                    page: snapshot.pager.page,
                    total_pages: snapshot.total_pages(),
                    on_prev: move |_| board.write().prev_page(),
                    on_next: move |_| board.write().next_page(),
                }
            }

            Modal {
                open: snapshot.dialog_open,
                on_open_change: move |open: bool| {
                    if !open {
                        board.write().cancel_dialog();
                    }
                },
                title: "Add Branch",
                description: "All fields are required.",
                form { onsubmit: submit,
                    for name in CreateBranchRequest::TEXT_FIELDS {
                        TextField {
                            key: "{name}",
                            placeholder: field_placeholder(name),
                            value: snapshot.form.field(name).to_string(),
                            error: snapshot.field_error(name),
                            on_input: move |v: String| board.write().form.set_field(name, v),
                        }
                    }
                    SelectField {
                        value: snapshot.form.state.clone(),
                        options: state_options,
                        placeholder: "Select State",
                        error: snapshot.field_error("state"),
                        on_change: move |v: String| board.write().form.state = v,
                    }
                    ModalActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| board.write().cancel_dialog(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: saving(),
                            busy_label: "Saving...",
                            "Create"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone)]
struct BranchRowProps {
    branch: shared_types::Branch,
    workflow: BranchWorkflow,
    board: Signal<BranchBoard>,
}

impl PartialEq for BranchRowProps {
    fn eq(&self, other: &Self) -> bool {
        self.branch == other.branch && self.board == other.board
    }
}

#[allow(non_snake_case)]
fn BranchRow(props: BranchRowProps) -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut pending = use_signal(|| false);
    let BranchRowProps { branch, workflow, mut board } = props;

    let code = branch.branch_code.clone().unwrap_or_default();
    let code_label = if code.is_empty() { "-".to_string() } else { code.clone() };
    let active = branch.active();

    let on_toggle = move |_next: bool| {
        if code.is_empty() || workflow.is_toggling(&code) {
            return;
        }
        let workflow = workflow.clone();
        let code = code.clone();
        spawn(async move {
            pending.set(true);
            match workflow.toggle(&code).await {
                Ok(list) => {
                    board.write().replace(list);
                    notify::success(toast, "Branch status updated");
                }
                Err(e) => notify::api_error(toast, &mut auth, &e),
            }
            pending.set(false);
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{code_label}" }
            DataTableCell { "{branch.name}" }
            DataTableCell { "{branch.full_address()}" }
            DataTableCell {
                div { class: "status-cell",
                    ToggleSwitch {
                        checked: active,
                        disabled: pending(),
                        on_change: on_toggle,
                    }
                    if active {
                        Badge { variant: BadgeVariant::Success, "Active" }
                    } else {
                        Badge { variant: BadgeVariant::Neutral, "Inactive" }
                    }
                }
            }
        }
    }
}

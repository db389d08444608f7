use super::{tab_at, tab_title, TABS};
use crate::auth::{use_api, use_auth};
use crate::notify;
use crate::routes::Route;
use api_client::{ClientWorkflow, RejectPrompt, RequestState};
use dioxus::prelude::*;
use shared_types::{AppErrorKind, Client, ClientSplit, VerificationTab};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, ConfirmDialog, DataTable, DataTableCell,
    DataTableRow, Modal, ModalActions, PageHeader, Skeleton, TabStrip, TextField,
};
use std::collections::HashMap;

const UNVERIFIED_COLUMNS: [&str; 5] = ["Name", "Firm", "Contact", "Address", "Actions"];
const VERIFIED_COLUMNS: [&str; 5] = ["Name", "Firm", "Contact", "Credit Limit", "Actions"];

/// Open verify dialog: target client plus the raw inputs.
#[derive(Debug, Clone, Default, PartialEq)]
struct VerifyDialog {
    client: Option<Client>,
    credit_limit: String,
    fixed_penalty: String,
}

/// Dealer verification: unverified dealers can be verified with a credit limit or rejected.
#[component]
pub fn ClientsPage() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let workflow = use_hook(|| ClientWorkflow::new(api));

    let mut split = use_signal(ClientSplit::default);
    let mut fetch = use_signal(RequestState::<()>::default);
    let mut active_tab = use_signal(|| 0usize);
    let mut verify = use_signal(VerifyDialog::default);
    let mut verify_errors = use_signal(HashMap::<String, String>::new);
    let mut reject = use_signal(RejectPrompt::default);
    let mut busy = use_signal(|| false);

    use_hook({
        let workflow = workflow.clone();
        move || {
            spawn(async move {
                fetch.set(RequestState::Loading);
                match workflow.reload().await {
                    Ok(fresh) => {
                        split.set(fresh);
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

    let submit_verify = {
        let workflow = workflow.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let form = verify.read().clone();
            let Some(client) = form.client else {
                return;
            };
            if workflow.is_busy(&client.id) {
                return;
            }
            let workflow = workflow.clone();
            spawn(async move {
                busy.set(true);
                match workflow
                    .verify(&client.id, &form.credit_limit, &form.fixed_penalty)
                    .await
                {
                    Ok(fresh) => {
                        split.set(fresh);
                        verify.set(VerifyDialog::default());
                        verify_errors.set(HashMap::new());
                        notify::success(toast, "Client verified successfully");
                    }
                    Err(e) if e.kind == AppErrorKind::ValidationError => {
                        verify_errors.set(e.field_errors);
                    }
                    Err(e) => notify::api_error(toast, &mut auth, &e),
                }
                busy.set(false);
            });
        }
    };

    let confirm_reject = {
        let workflow = workflow.clone();
        move |_: MouseEvent| {
            let Some(client) = reject.write().confirm() else {
                return;
            };
            if workflow.is_busy(&client.id) {
                return;
            }
            let workflow = workflow.clone();
            spawn(async move {
                busy.set(true);
                match workflow.reject(&client.id).await {
                    Ok(fresh) => {
                        split.set(fresh);
                        notify::success(toast, "Client rejected");
                    }
                    Err(e) => notify::api_error(toast, &mut auth, &e),
                }
                busy.set(false);
            });
        }
    };

    let tab = tab_at(active_tab());
    let rows = split.read().tab(tab).to_vec();
    let columns = match tab {
        VerificationTab::Unverified => UNVERIFIED_COLUMNS,
        VerificationTab::Verified => VERIFIED_COLUMNS,
    };
    let loading = fetch.read().is_loading();
    let verify_error = move |key: &str| verify_errors.read().get(key).cloned().unwrap_or_default();
    let verify_open = verify.read().client.is_some();
    let verify_title = verify
        .read()
        .client
        .as_ref()
        .map(|c| format!("Verify {}", c.full_name()))
        .unwrap_or_default();
    let reject_message = reject
        .read()
        .target()
        .map(|c| format!("Reject {} ({})? This cannot be undone.", c.full_name(), c.firm_name))
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader { title: "Clients", subtitle: "Review dealer registrations" }

            TabStrip {
                tabs: TABS.iter().map(|t| tab_title(*t).to_string()).collect::<Vec<_>>(),
                active: active_tab(),
                on_select: move |i: usize| active_tab.set(i),
            }

            if loading {
                Skeleton { rows: 5 }
            } else {
                DataTable {
                    columns: columns.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                    is_empty: rows.is_empty(),
                    empty_message: format!("No {} clients", tab_title(tab).to_lowercase()),
                    for client in rows {
                        DataTableRow { key: "{client.id}",
                            DataTableCell { "{client.full_name()}" }
                            DataTableCell { "{client.firm_name}" }
                            DataTableCell { "{client.contact()}" }
                            if tab == VerificationTab::Verified {
                                DataTableCell { "{client.credit_limit_label()}" }
                                DataTableCell {
                                    Link {
                                        to: Route::ClientDetails { id: client.id.clone() },
                                        class: "table-link",
                                        "View Details"
                                    }
                                }
                            } else {
                                DataTableCell { "{client.full_address()}" }
                                DataTableCell {
                                    div { class: "row-actions",
                                        Button {
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let client = client.clone();
                                                move |_| {
                                                    verify_errors.set(HashMap::new());
                                                    verify.set(VerifyDialog {
                                                        client: Some(client.clone()),
                                                        ..VerifyDialog::default()
                                                    });
                                                }
                                            },
                                            "Verify"
                                        }
                                        Button {
                                            size: ButtonSize::Small,
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let client = client.clone();
                                                move |_| reject.set(RejectPrompt::ask(client.clone()))
                                            },
                                            "Reject"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Modal {
                open: verify_open,
                on_open_change: move |open: bool| {
                    if !open {
                        verify.set(VerifyDialog::default());
                    }
                },
                title: verify_title,
                description: "Set the dealer's credit terms.",
                form { onsubmit: submit_verify,
                    TextField {
                        label: "Credit Limit",
                        input_type: "number",
                        value: verify.read().credit_limit.clone(),
                        error: verify_error("credit_limit"),
                        on_input: move |v: String| verify.write().credit_limit = v,
                    }
                    TextField {
                        label: "Fixed Penalty",
                        input_type: "number",
                        value: verify.read().fixed_penalty.clone(),
                        error: verify_error("fixed_penalty"),
                        on_input: move |v: String| verify.write().fixed_penalty = v,
                    }
                    ModalActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| verify.set(VerifyDialog::default()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: busy(),
                            busy_label: "Verifying...",
                            "Verify"
                        }
                    }
                }
            }

            ConfirmDialog {
                open: reject.read().is_open(),
                on_open_change: move |open: bool| reject.write().set_open(open),
                title: "Reject client",
                message: reject_message,
                confirm_label: "Reject",
                on_confirm: confirm_reject,
            }
        }
    }
}

use api_client::{AssignDialog, RequestState};
use dioxus::prelude::*;
use shared_types::ActiveClient;
use shared_ui::{Button, ButtonVariant, Modal, ModalActions, Skeleton, TextField};

/// Dealer picker for assigning a case. Submit stays disabled until a dealer is chosen.
///
/// `on_submit` receives `(case_id, client_id)`; the caller closes the dialog once the
/// assignment settles.
#[component]
pub fn AssignCaseDialog(
    mut dialog: Signal<AssignDialog>,
    dealers: Signal<RequestState<Vec<ActiveClient>>>,
    busy: bool,
    on_submit: EventHandler<(String, String)>,
) -> Element {
    let state = dialog.read().clone();
    let selected_label = state.selected.as_ref().map(ActiveClient::label);

    let list = match &*dealers.read() {
        RequestState::Idle | RequestState::Loading => rsx! { Skeleton { rows: 3 } },
        RequestState::Failed(e) => rsx! {
            p { class: "form-error", "{e.friendly_message()}" }
        },
        RequestState::Ready(all) => {
            let hits: Vec<ActiveClient> = state.matches(all).into_iter().cloned().collect();
            rsx! {
                if hits.is_empty() {
                    p { class: "muted", "No dealers match" }
                } else {
                    ul { class: "dealer-list",
                        for dealer in hits {
                            li {
                                key: "{dealer.id}",
                                class: if state.selected.as_ref().is_some_and(|s| s.id == dealer.id) { "dealer-option selected" } else { "dealer-option" },
                                onclick: {
                                    let dealer = dealer.clone();
                                    move |_| dialog.write().select(dealer.clone())
                                },
                                "{dealer.label()}"
                            }
                        }
                    }
                }
            }
        }
    };

    let submit = move |_: MouseEvent| {
        let current = dialog.read().clone();
        if let (Some(case_id), Some(dealer)) = (current.case_id, current.selected) {
            on_submit.call((case_id, dealer.id));
        }
    };

    rsx! {
        Modal {
            open: state.is_open(),
            on_open_change: move |open: bool| {
                if !open {
                    dialog.set(AssignDialog::default());
                }
            },
            title: state.title(),
            description: "Choose the dealer who will handle this case.",
            TextField {
                label: "Search dealer",
                value: state.query.clone(),
                placeholder: "Type a name",
                on_input: move |v: String| dialog.write().query = v,
            }
            if let Some(label) = selected_label {
                p { class: "dealer-selected", "Selected: {label}" }
            }
            {list}
            ModalActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| dialog.set(AssignDialog::default()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !state.can_submit(),
                    busy,
                    busy_label: "Assigning...",
                    onclick: submit,
                    "Assign"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as alert;
use dioxus_primitives::dialog as prim;

/// Modal dialog. Closing from the overlay or Escape reports `false` through `on_open_change`.
#[component]
pub fn Modal(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "modal-overlay",
            open: open,
            on_open_change: move |v: bool| on_open_change.call(v),
            prim::DialogContent {
                div { class: "modal-body",
                    prim::DialogTitle { class: "modal-title", "{title}" }
                    if !description.is_empty() {
                        prim::DialogDescription { class: "modal-description", "{description}" }
                    }
                    {children}
                }
            }
        }
    }
}

/// Footer row for modal buttons.
#[component]
pub fn ModalActions(children: Element) -> Element {
    rsx! {
        div { class: "modal-actions", {children} }
    }
}

/// Yes/no confirmation for irreversible actions.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        alert::AlertDialogRoot {
            class: "modal-overlay",
            open: open,
            on_open_change: move |v: bool| on_open_change.call(v),
            alert::AlertDialogContent {
                div { class: "modal-body",
                    alert::AlertDialogTitle { class: "modal-title", "{title}" }
                    alert::AlertDialogDescription { class: "modal-description", "{message}" }
                    alert::AlertDialogActions { class: "modal-actions",
                        alert::AlertDialogCancel { class: "confirm-cancel", "Cancel" }
                        alert::AlertDialogAction {
                            class: "confirm-action",
                            on_click: move |evt: MouseEvent| on_confirm.call(evt),
                            "{confirm_label}"
                        }
                    }
                }
            }
        }
    }
}

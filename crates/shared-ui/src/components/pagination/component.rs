use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// "Page k of N" with Previous/Next. Buttons disable at either end.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: page <= 1,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { class: "pagination-info", {page_label(page, total_pages)} }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: page >= total_pages,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}

pub fn page_label(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

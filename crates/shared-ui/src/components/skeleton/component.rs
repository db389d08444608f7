use dioxus::prelude::*;

/// Pulsing placeholder shown while a request is loading.
#[component]
pub fn Skeleton(#[props(default = 1)] rows: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-stack",
            for i in 0..rows {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}

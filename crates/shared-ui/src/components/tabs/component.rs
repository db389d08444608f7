use dioxus::prelude::*;

/// Row of tab buttons. The caller owns which tab is active.
#[component]
pub fn TabStrip(tabs: Vec<String>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-strip", role: "tablist",
            for (i, tab) in tabs.iter().enumerate() {
                button {
                    key: "{i}",
                    r#type: "button",
                    role: "tab",
                    class: if i == active { "tab active" } else { "tab" },
                    "aria-selected": i == active,
                    onclick: move |_| on_select.call(i),
                    "{tab}"
                }
            }
        }
    }
}

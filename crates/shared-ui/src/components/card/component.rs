use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

/// Card heading with an optional line of supporting text.
#[component]
pub fn CardHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "card-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Dashboard tile: a label, a figure and an optional click target.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        div {
            class: if clickable { "card stat-card clickable" } else { "card stat-card" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}

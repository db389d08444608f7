use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// On/off switch with an accessible label.
#[component]
pub fn ToggleSwitch(
    checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: String,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "switch-wrapper",
            prim::Switch {
                class: "switch",
                checked: checked,
                disabled: disabled,
                on_checked_change: move |v: bool| on_change.call(v),
                prim::SwitchThumb { class: "switch-thumb" }
            }
            if !label.is_empty() {
                span { class: "switch-label", "{label}" }
            }
        }
    }
}

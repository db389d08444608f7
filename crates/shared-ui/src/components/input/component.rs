use dioxus::prelude::*;

/// Labelled text input with an inline error line underneath.
#[component]
pub fn TextField(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Shown in red under the input when non-empty.
    #[props(default)]
    error: String,
    on_input: EventHandler<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                ..merged,
            }
            if invalid {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

use dioxus::prelude::*;

/// One `<option>`: submitted value and visible label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` with a label, an optional empty placeholder entry and an inline error.
#[component]
pub fn SelectField(
    #[props(default)] label: String,
    #[props(default)] value: String,
    options: Vec<SelectOption>,
    /// Text of a leading empty option. Omitted when blank.
    #[props(default)]
    placeholder: String,
    #[props(default)] error: String,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "select-field",
            if !label.is_empty() {
                label { class: "select-label", "{label}" }
            }
            select {
                class: "select-input",
                value: value.clone(),
                disabled: disabled,
                "aria-invalid": !error.is_empty(),
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            if !error.is_empty() {
                span { class: "select-error", "{error}" }
            }
        }
    }
}

use crate::auth::{use_api, use_auth};
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppErrorKind, SignupForm, INDIAN_STATES};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, SelectField, SelectOption,
    TextField,
};
use std::collections::HashMap;

fn input_type(field: &str) -> &'static str {
    match field {
        "email" => "email",
        "password" => "password",
        "mobile_no" => "tel",
        _ => "text",
    }
}

/// Dealer registration. New accounts wait for an admin to verify them.
#[component]
pub fn SignUp() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut form = use_signal(SignupForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Login {});
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            saving.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());
            let current = form.read().clone();
            match api.signup_client(&current).await {
                Ok(()) => {
                    notify::success(
                        toast,
                        "Registration received. You can sign in once your firm is verified.",
                    );
                    navigator().replace(Route::Login {});
                }
                Err(e) if e.kind == AppErrorKind::ValidationError => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => error_msg.set(Some(e.friendly_message())),
            }
            saving.set(false);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();
    let state_options: Vec<SelectOption> = INDIAN_STATES
        .iter()
        .map(|s| SelectOption::new(*s, *s))
        .collect();
    let snapshot = form.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card auth-card-wide",
                CardHeader { title: "Dealer Sign Up", subtitle: "Register your firm" }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: submit,
                        div { class: "form-grid",
                            for (name, label) in SignupForm::TEXT_FIELDS {
                                TextField {
                                    key: "{name}",
                                    label: label,
                                    input_type: input_type(name),
                                    value: snapshot.field(name).to_string(),
                                    error: field_error(name),
                                    on_input: move |v: String| form.write().set_field(name, v),
                                }
                            }
                            SelectField {
                                label: "State",
                                value: snapshot.state.clone(),
                                options: state_options,
                                placeholder: "Select State",
                                error: field_error("state"),
                                on_change: move |v: String| form.write().state = v,
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: saving(),
                            busy_label: "Submitting...",
                            class: "auth-submit",
                            "Sign Up"
                        }
                    }
                    p { class: "auth-switch",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_fields_get_matching_input_types() {
        assert_eq!(input_type("password"), "password");
        assert_eq!(input_type("email"), "email");
        assert_eq!(input_type("firm_name"), "text");
    }
}

use crate::auth::{use_api, use_auth};
use crate::routes::{home_route, Route};
use dioxus::prelude::*;
use shared_types::{AppErrorKind, LoginRequest};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, TextField};
use std::collections::HashMap;

/// Sign-in page. Signed-in visitors are sent straight to their home page.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(role) = auth.role() {
        navigator().replace(home_route(role));
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&req).await {
                Ok(session) => {
                    let role = session.user.role();
                    auth.set_user(session.user);
                    if let Some(role) = role {
                        navigator().replace(home_route(role));
                    }
                }
                Err(e) if e.kind == AppErrorKind::ValidationError => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => error_msg.set(Some(e.friendly_message())),
            }
            loading.set(false);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader { title: "Sign In", subtitle: "Vehicle case management console" }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: handle_login,
                        TextField {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            placeholder: "you@company.in",
                            error: field_error("email"),
                            on_input: move |v: String| email.set(v),
                        }
                        TextField {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_error("password"),
                            on_input: move |v: String| password.set(v),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: loading(),
                            busy_label: "Signing in...",
                            class: "auth-submit",
                            "Sign In"
                        }
                    }
                    p { class: "auth-switch",
                        "New dealer? "
                        Link { to: Route::SignUp {}, "Create an account" }
                    }
                }
            }
        }
    }
}


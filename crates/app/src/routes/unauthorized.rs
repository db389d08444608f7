use crate::auth::use_auth;
use crate::routes::{home_route, Route};
use dioxus::prelude::*;

/// Shown when a signed-in user opens a page their role cannot access.
#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let target = auth.role().map(home_route).unwrap_or(Route::Login {});

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "403" }
                h1 { class: "status-title", "Access Denied" }
                p { class: "status-message", "You do not have permission to view this page." }
                Link { to: target, class: "status-link", "Go to your home page" }
            }
        }
    }
}

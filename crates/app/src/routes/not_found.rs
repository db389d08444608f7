use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::{home_route, Route};

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let target = auth.role().map(home_route).unwrap_or(Route::Login {});

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "404" }
                h1 { class: "status-title", "Page Not Found" }
                p { class: "status-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: target, class: "status-link", "Back to safety" }
            }
        }
    }
}

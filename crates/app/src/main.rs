use api_client::{ApiClient, TokenStore};
use dioxus::prelude::*;
use std::sync::Arc;

mod auth;
mod format_helpers;
pub mod notify;
pub mod role_gate;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Session storage for the current platform: `localStorage` in the browser, memory elsewhere.
fn token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(api_client::LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(api_client::MemoryTokenStore::default())
    }
}

fn build_client() -> Result<ApiClient, shared_types::AppError> {
    let settings = api_client::config::api_settings();
    tracing::info!(base_url = %settings.base_url, "Connecting to case API");
    ApiClient::new(&settings, token_store())
}

#[component]
fn App() -> Element {
    let client = use_hook(build_client);

    match client {
        Ok(api) => rsx! {
            Shell { api }
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to start API client");
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "fatal-error",
                    h1 { "Unable to start" }
                    p { "{e.friendly_message()}" }
                }
            }
        }
    }
}

#[derive(Props, Clone)]
struct ShellProps {
    api: ApiClient,
}

impl PartialEq for ShellProps {
    fn eq(&self, other: &Self) -> bool {
        self.api.base_url() == other.api.base_url()
    }
}

/// Provides the API client and restored session to every route.
#[allow(non_snake_case)]
fn Shell(props: ShellProps) -> Element {
    let api = use_context_provider(|| props.api.clone());
    use_context_provider(|| AuthState::restore(&api));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

use shared_types::{ApiSettings, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "casedesk.toml";

/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "CASEDESK_API_URL";

/// Load the config once and cache it. Later calls return the cached value.
///
/// A missing or unparseable `casedesk.toml` yields defaults. The
/// `CASEDESK_API_URL` override is applied on top either way.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config_file();
        if let Some(url) = api_url_override() {
            tracing::info!(base_url = %url, "API base URL taken from {API_URL_ENV}");
            config.api.base_url = url;
        }
        config
    })
}

/// Settings the API client is built from.
pub fn api_settings() -> ApiSettings {
    load_config().api.clone()
}

/// Parse config text, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> AppConfig {
    AppConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_override() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn api_url_override() -> Option<String> {
    option_env!("CASEDESK_API_URL")
        .map(str::to_string)
        .filter(|v| !v.trim().is_empty())
}

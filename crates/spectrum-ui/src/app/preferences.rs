//! Configuration and environment helpers for the app shell.
//!
//! Overrides are JSON documents in `LocalStorage`; anything missing or
//! invalid falls back to defaults and is reported on the console.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use spectrum_notifications::{ClientConfig, ConfigError, PanelConfig};
use web_sys::Url;

pub(crate) const PANEL_CONFIG_KEY: &str = "spectrum.panel_config";
pub(crate) const CLIENT_CONFIG_KEY: &str = "spectrum.client_config";

fn stored_override(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub(crate) fn load_panel_config() -> PanelConfig {
    match stored_override(PANEL_CONFIG_KEY) {
        Some(raw) => PanelConfig::from_json(&raw).unwrap_or_else(|err| {
            log_config_error(PANEL_CONFIG_KEY, &err);
            PanelConfig::default()
        }),
        None => PanelConfig::default(),
    }
}

pub(crate) fn load_client_config() -> ClientConfig {
    let mut config = match stored_override(CLIENT_CONFIG_KEY) {
        Some(raw) => ClientConfig::from_json(&raw).unwrap_or_else(|err| {
            log_config_error(CLIENT_CONFIG_KEY, &err);
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    };
    if config.base_url.is_empty() {
        config.base_url = api_base_url();
    }
    config
}

/// Same host as the page; the dev client port maps to the dev API port.
fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "3000" => Some("3001"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:3001".to_string()
}

fn log_config_error(key: &'static str, err: &ConfigError) {
    let detail = match err {
        ConfigError::Parse { source } => source.to_string(),
        ConfigError::InvalidField { field, reason, .. } => format!("{field}: {reason}"),
    };
    console::error!("invalid configuration override", key, detail);
}

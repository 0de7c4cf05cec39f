//! Runtime Configuration
//!
//! Read once at startup from the optional `window.__MENU_CONFIG__` object.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_KEY: &str = "__MENU_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`
    pub log_level: String,
    /// Shop opened from `/`
    pub default_username: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            log_level: "info".to_string(),
            default_username: None,
        }
    }
}

impl AppConfig {
    /// Config from the page, defaults for anything missing or malformed
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_KEY)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[CONFIG] ignoring {}: {}", CONFIG_KEY, e).into());
            Self::default()
        })
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let config: AppConfig = serde_json::from_str(r#"{"defaultUsername":"luigis"}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.default_username.as_deref(), Some("luigis"));
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_level_parsing() {
        let config = AppConfig { log_level: "debug".into(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        let config = AppConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::JsValue;
use web_sys::Window;

use wars_core::GameConfig;
use wars_view::{ConfigError, ViewConfig};

/// Global the host page may define before the module starts.
const PAGE_CONFIG_KEY: &str = "__WARS_CONFIG";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("page config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    View(#[from] ConfigError),
    #[error("page config is not JSON-serializable")]
    Opaque,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: ViewConfig,
    pub game: GameConfig,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, AppConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.view.validate()?;
        Ok(config)
    }

    /// Reads `window.__WARS_CONFIG`, either a JSON string or a plain object.
    pub fn from_window(window: &Window) -> Result<Self, AppConfigError> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(PAGE_CONFIG_KEY))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Ok(AppConfig::default());
        }
        let text = match value.as_string() {
            Some(s) => s,
            None => js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
                .ok_or(AppConfigError::Opaque)?,
        };
        Self::from_json(&text)
    }

    pub fn level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(LevelFilter::INFO)
    }
}

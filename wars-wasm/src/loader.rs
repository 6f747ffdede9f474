use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Window;

use wars_core::{Game, MapData, MapError};
use wars_view::{PickError, Session};

use crate::config::AppConfig;
use crate::utils::{asset_url, fetch_text_with_fallbacks};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("map '{0}' could not be fetched")]
    Fetch(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Pick(#[from] PickError),
}

impl From<LoadError> for JsValue {
    fn from(e: LoadError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub fn build_session(data: &MapData, config: &AppConfig) -> Result<Session<Game>, LoadError> {
    let game = Game::new(data, config.game.clone())?;
    Ok(Session::new(game, config.view.clone())?)
}

/// Fetches `maps/<name>.json`, trying the base URL first.
pub async fn fetch_map(window: &Window, name: &str) -> Result<MapData, LoadError> {
    let rel = format!("maps/{name}.json");
    let text = fetch_text_with_fallbacks(
        window,
        &[&asset_url(&rel), &format!("/{rel}"), &rel],
    )
    .await
    .ok_or_else(|| LoadError::Fetch(name.to_string()))?;
    Ok(MapData::from_json(&text)?)
}

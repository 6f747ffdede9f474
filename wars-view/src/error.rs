use thiserror::Error;
use wars_core::{Rgb, TerritoryId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("cannot allocate a {width}x{height} picking surface")]
    Surface { width: u32, height: u32 },
    #[error("territories {first} and {second} share pick color {color}")]
    DuplicatePickColor {
        color: Rgb,
        first: TerritoryId,
        second: TerritoryId,
    },
    #[error("territory {territory} uses the background color {color} for picking")]
    BackgroundCollision { territory: TerritoryId, color: Rgb },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map scale must be a finite number >= 1, got {0}")]
    InvalidScale(f64),
}

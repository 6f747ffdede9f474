//! Presentation constants. Lengths are canvas pixels unless noted.

use serde::{Deserialize, Serialize};
use wars_core::Rgb;

use crate::error::ConfigError;

/// Pixels per map-grid unit.
pub const DEFAULT_MAP_SCALE: f64 = 20.0;
/// Halo radius as a fraction of the map scale.
pub const TROOP_RADIUS_FACTOR: f64 = 0.65;
/// Arrow endpoints sit this many halo radii away from each center.
pub const ARROW_CLIP_MULTIPLIER: f64 = 1.25;
pub const ARROW_HEAD_LEN: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub map_scale: f64,
    /// Outline of the board.
    pub border_color: Rgb,
    /// Territory outlines.
    pub grid_color: Rgb,
    pub troop_radius_factor: f64,
    pub arrow_clip_multiplier: f64,
    pub arrow_head_len: f64,
    pub arrow_color: Rgb,
    pub arrow_line_width: f64,
    pub halo_shadow_blur: f64,
    pub halo_shadow_color: Rgb,
    pub label_font: String,
    pub label_color: Rgb,
    pub label_outline: Rgb,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            map_scale: DEFAULT_MAP_SCALE,
            border_color: Rgb(0xDDDDDD),
            grid_color: Rgb(0xCCCCCC),
            troop_radius_factor: TROOP_RADIUS_FACTOR,
            arrow_clip_multiplier: ARROW_CLIP_MULTIPLIER,
            arrow_head_len: ARROW_HEAD_LEN,
            arrow_color: Rgb(0xFFFFFF),
            arrow_line_width: 2.0,
            halo_shadow_blur: 15.0,
            halo_shadow_color: Rgb(0x000000),
            label_font: "bold 12px Arial".to_string(),
            label_color: Rgb(0xFFFFFF),
            label_outline: Rgb(0x000000),
        }
    }
}

impl ViewConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.map_scale.is_finite() && self.map_scale >= 1.0) {
            return Err(ConfigError::InvalidScale(self.map_scale));
        }
        Ok(())
    }

    pub fn troop_radius(&self) -> f64 {
        self.map_scale * self.troop_radius_factor
    }

    /// Distance from a center to where an arrow starts or ends.
    pub fn arrow_clip(&self) -> f64 {
        self.troop_radius() * self.arrow_clip_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ViewConfig::from_json(r#"{ "map_scale": 10, "arrow_color": 16711680 }"#).unwrap();
        assert_eq!(c.map_scale, 10.0);
        assert_eq!(c.arrow_color, Rgb(0xFF0000));
        assert_eq!(c.label_font, "bold 12px Arial");
        assert_eq!(c.halo_shadow_color, Rgb(0x000000));
        assert!((c.troop_radius() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_unusable_scale() {
        assert!(matches!(
            ViewConfig::from_json(r#"{ "map_scale": 0 }"#),
            Err(ConfigError::InvalidScale(_))
        ));
        assert!(matches!(
            ViewConfig::from_json("[]"),
            Err(ConfigError::Parse(_))
        ));
    }
}

//! Color-keyed hit testing.
//!
//! Every territory is filled on an offscreen surface with its own opaque
//! pick color, without anti-aliasing, so one pixel read answers "which
//! territory is under the pointer". Geometry never changes during a
//! session, so the surface is rasterized once.

use std::collections::HashMap;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};
use tracing::{debug, warn};
use wars_core::{Engine, Rgb, TerritoryId};

use crate::config::ViewConfig;
use crate::error::PickError;
use crate::geometry::{canvas_size, grid_to_px};

pub struct ColorPicker {
    surface: Pixmap,
    background: Rgb,
    by_color: HashMap<Rgb, TerritoryId>,
}

impl ColorPicker {
    pub fn build<E: Engine + ?Sized>(engine: &E, config: &ViewConfig) -> Result<Self, PickError> {
        let scale = config.map_scale;
        let (width, height) = canvas_size(engine.width(), engine.height(), scale);
        let mut surface = Pixmap::new(width, height).ok_or(PickError::Surface { width, height })?;

        let background = engine.background_color();
        surface.fill(opaque(background));

        let count = engine.territory_count();
        let mut by_color = HashMap::with_capacity(count);
        for t in 0..count {
            let color = engine.pick_color_for(t);
            if color == background {
                return Err(PickError::BackgroundCollision {
                    territory: t,
                    color,
                });
            }
            if let Some(&first) = by_color.get(&color) {
                return Err(PickError::DuplicatePickColor {
                    color,
                    first,
                    second: t,
                });
            }
            by_color.insert(color, t);

            let mut pb = PathBuilder::new();
            for (i, &v) in engine.vertices_for(t).iter().enumerate() {
                let p = grid_to_px(v, engine.width(), scale);
                if i == 0 {
                    pb.move_to(p.x as f32, p.y as f32);
                } else {
                    pb.line_to(p.x as f32, p.y as f32);
                }
            }
            pb.close();
            let Some(path) = pb.finish() else {
                warn!(territory = t, "territory outline has no area; it cannot be picked");
                continue;
            };

            let mut paint = Paint::default();
            paint.set_color(opaque(color));
            paint.anti_alias = false;
            surface.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }

        debug!(width, height, territories = count, "picking surface ready");
        Ok(ColorPicker {
            surface,
            background,
            by_color,
        })
    }

    /// Territory under canvas pixel `(x, y)`, or `None` for background and
    /// points off the surface.
    pub fn pick(&self, x: f64, y: f64) -> Option<TerritoryId> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let color = self.sample(x.floor() as u32, y.floor() as u32)?;
        if color == self.background {
            return None;
        }
        self.by_color.get(&color).copied()
    }

    /// Raw surface color at a pixel.
    pub fn sample(&self, x: u32, y: u32) -> Option<Rgb> {
        let px = self.surface.pixel(x, y)?;
        Some(Rgb::from_rgb8(px.red(), px.green(), px.blue()))
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }
}

fn opaque(c: Rgb) -> Color {
    Color::from_rgba8(c.r(), c.g(), c.b(), 0xFF)
}

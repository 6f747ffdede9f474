use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use wars_core::GridPoint;

/// Canvas-space point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// Convert a grid vertex index into canvas pixels.
pub fn grid_to_px(vertex: u32, width: u32, scale: f64) -> Point {
    let g = GridPoint::from_index(vertex, width);
    Point {
        x: g.x as f64 * scale,
        y: g.y as f64 * scale,
    }
}

/// Canvas size covering a `width x height` vertex grid.
pub fn canvas_size(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let px = |cells: u32| ((cells.saturating_sub(1) as f64) * scale).round().max(1.0) as u32;
    (px(width), px(height))
}

/// A movement arrow clipped to the halos at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowGeometry {
    pub from: Point,
    pub to: Point,
    /// The two back corners of the arrowhead; the tip is `to`.
    pub head: [Point; 2],
}

impl ArrowGeometry {
    /// `None` when the centers coincide or sit too close for a shaft to
    /// remain after clipping `clip` pixels off both ends.
    pub fn between(from: Point, to: Point, clip: f64, head_len: f64) -> Option<Self> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len = dx.hypot(dy);
        if len <= f64::EPSILON || len <= 2.0 * clip {
            return None;
        }
        let angle = dy.atan2(dx);
        let (sin, cos) = angle.sin_cos();
        let start = Point {
            x: from.x + clip * cos,
            y: from.y + clip * sin,
        };
        let end = Point {
            x: to.x - clip * cos,
            y: to.y - clip * sin,
        };
        let wing = |a: f64| Point {
            x: end.x - head_len * a.cos(),
            y: end.y - head_len * a.sin(),
        };
        Some(ArrowGeometry {
            from: start,
            to: end,
            head: [wing(angle - PI / 6.0), wing(angle + PI / 6.0)],
        })
    }
}

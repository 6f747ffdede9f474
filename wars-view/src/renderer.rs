//! Map layer as a display list.
//!
//! The renderer turns a [`FrameSnapshot`] into an ordered list of
//! [`DrawCommand`]s; the browser shell replays the list onto a 2D canvas.
//! Keeping the list a plain value makes every frame inspectable in tests.

use wars_core::Rgb;

use crate::config::ViewConfig;
use crate::geometry::{ArrowGeometry, Point};
use crate::snapshot::FrameSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the canvas and outline it.
    Clear { width: f64, height: f64, border: Rgb },
    FillPolygon {
        points: Vec<Point>,
        fill: Rgb,
        stroke: Rgb,
    },
    /// Disc with a drop shadow behind a troop label.
    Halo {
        center: Point,
        radius: f64,
        fill: Rgb,
        shadow: Rgb,
        shadow_blur: f64,
    },
    Arrow {
        shaft: (Point, Point),
        head: [Point; 3],
        color: Rgb,
        line_width: f64,
    },
    Label {
        at: Point,
        text: String,
        font: String,
        fill: Rgb,
        outline: Rgb,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn arrows(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arrow { .. }))
    }

    /// Label texts in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn halo_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Halo { .. }))
            .count()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapRenderer {
    config: ViewConfig,
}

impl MapRenderer {
    pub fn new(config: ViewConfig) -> Self {
        MapRenderer { config }
    }

    pub fn render_frame(&self, snap: &FrameSnapshot) -> Frame {
        let cfg = &self.config;
        let mut commands = Vec::with_capacity(snap.territories.len() * 3 + 2);

        commands.push(DrawCommand::Clear {
            width: snap.canvas_width as f64,
            height: snap.canvas_height as f64,
            border: cfg.border_color,
        });

        for t in &snap.territories {
            commands.push(DrawCommand::FillPolygon {
                points: t.outline.clone(),
                fill: t.fill,
                stroke: cfg.grid_color,
            });
        }

        let radius = cfg.troop_radius();
        for t in snap.territories.iter().filter(|t| t.highlighted) {
            commands.push(DrawCommand::Halo {
                center: t.center,
                radius,
                fill: t.fill,
                shadow: cfg.halo_shadow_color,
                shadow_blur: cfg.halo_shadow_blur,
            });
        }

        if let Some((from, to)) = snap.pending_arrow
            && let Some(arrow) = ArrowGeometry::between(from, to, cfg.arrow_clip(), cfg.arrow_head_len)
        {
            commands.push(DrawCommand::Arrow {
                shaft: (arrow.from, arrow.to),
                head: [arrow.to, arrow.head[0], arrow.head[1]],
                color: cfg.arrow_color,
                line_width: cfg.arrow_line_width,
            });
        }

        for t in &snap.territories {
            commands.push(DrawCommand::Label {
                at: t.center,
                text: t.troops.to_string(),
                font: cfg.label_font.clone(),
                fill: cfg.label_color,
                outline: cfg.label_outline,
            });
        }

        Frame { commands }
    }
}

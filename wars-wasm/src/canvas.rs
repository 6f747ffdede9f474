use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use wars_view::{DrawCommand, Frame, Point};

use crate::dom::DomError;

/// Canvas the map is painted on and clicked through.
pub const MAP_CANVAS_ID: &str = "rust-wars-map";

// Style properties are assigned directly; the typed setters are deprecated.
fn set_style(ctx: &CanvasRenderingContext2d, prop: &str, color: &str) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str(prop), &JsValue::from_str(color));
}

pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style(ctx, "fillStyle", color);
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style(ctx, "strokeStyle", color);
}

pub fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), DomError> {
    let cv = document
        .get_element_by_id(MAP_CANVAS_ID)
        .ok_or_else(|| DomError::Missing(MAP_CANVAS_ID.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DomError::WrongType {
            id: MAP_CANVAS_ID.to_string(),
            expected: "canvas",
        })?;
    let ctx = cv
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(DomError::NoContext)?;
    Ok((cv, ctx))
}

/// Client coordinates to canvas pixels, so picking still lines up when CSS
/// scales the element.
pub fn event_canvas_coords(e: &MouseEvent, cv: &HtmlCanvasElement) -> (f64, f64) {
    let rect = cv.get_bounding_client_rect();
    let x = (e.client_x() as f64 - rect.left()) * (cv.width() as f64) / rect.width().max(1.0);
    let y = (e.client_y() as f64 - rect.top()) * (cv.height() as f64) / rect.height().max(1.0);
    (x, y)
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, pts: &[Point]) {
    ctx.begin_path();
    if let Some((first, rest)) = pts.split_first() {
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}

/// Replays a display list onto the 2D context.
pub fn paint_frame(ctx: &CanvasRenderingContext2d, frame: &Frame) {
    for cmd in &frame.commands {
        match cmd {
            DrawCommand::Clear {
                width,
                height,
                border,
            } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
                set_stroke_style(ctx, &border.css());
                ctx.set_line_width(1.0);
                ctx.stroke_rect(0.5, 0.5, width - 1.0, height - 1.0);
            }
            DrawCommand::FillPolygon {
                points,
                fill,
                stroke,
            } => {
                trace_polygon(ctx, points);
                set_fill_style(ctx, &fill.css());
                ctx.fill();
                set_stroke_style(ctx, &stroke.css());
                ctx.set_line_width(1.0);
                ctx.stroke();
            }
            DrawCommand::Halo {
                center,
                radius,
                fill,
                shadow,
                shadow_blur,
            } => {
                ctx.save();
                ctx.set_shadow_blur(*shadow_blur);
                ctx.set_shadow_color(&shadow.css());
                ctx.begin_path();
                let _ = ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU);
                set_fill_style(ctx, &fill.css());
                ctx.fill();
                ctx.restore();
            }
            DrawCommand::Arrow {
                shaft,
                head,
                color,
                line_width,
            } => {
                let css = color.css();
                set_stroke_style(ctx, &css);
                set_fill_style(ctx, &css);
                ctx.set_line_width(*line_width);
                ctx.begin_path();
                ctx.move_to(shaft.0.x, shaft.0.y);
                ctx.line_to(shaft.1.x, shaft.1.y);
                for p in &head[1..] {
                    ctx.line_to(p.x, p.y);
                }
                ctx.line_to(head[0].x, head[0].y);
                ctx.close_path();
                ctx.fill();
                ctx.stroke();
            }
            DrawCommand::Label {
                at,
                text,
                font,
                fill,
                outline,
            } => {
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_line_width(3.0);
                set_stroke_style(ctx, &outline.css());
                let _ = ctx.stroke_text(text, at.x, at.y);
                set_fill_style(ctx, &fill.css());
                let _ = ctx.fill_text(text, at.x, at.y);
            }
        }
    }
}

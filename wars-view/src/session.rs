use wars_core::Engine;

use crate::config::ViewConfig;
use crate::controls::{ControlsView, PhaseController};
use crate::error::PickError;
use crate::picking::ColorPicker;
use crate::renderer::{Frame, MapRenderer};
use crate::router::{ControlEvent, InputRouter, Redraw};
use crate::snapshot::FrameSnapshot;

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPass {
    pub frame: Frame,
    pub controls: ControlsView,
}

/// UI context: the engine plus every presentation component bound to it.
pub struct Session<E: Engine> {
    engine: E,
    picker: ColorPicker,
    router: InputRouter,
    renderer: MapRenderer,
    controller: PhaseController,
    config: ViewConfig,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E, config: ViewConfig) -> Result<Self, PickError> {
        let picker = ColorPicker::build(&engine, &config)?;
        Ok(Session {
            engine,
            picker,
            router: InputRouter,
            renderer: MapRenderer::new(config.clone()),
            controller: PhaseController,
            config,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.picker.width(), self.picker.height())
    }

    pub fn click(&mut self, x: f64, y: f64) -> Redraw {
        self.router.on_map_click(&mut self.engine, &self.picker, x, y)
    }

    pub fn dispatch(&mut self, event: ControlEvent) -> Redraw {
        self.router.on_control(&mut self.engine, event)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.engine, self.config.map_scale)
    }

    pub fn render_pass(&self) -> RenderPass {
        let snap = self.snapshot();
        RenderPass {
            frame: self.renderer.render_frame(&snap),
            controls: self.controller.project(&snap),
        }
    }
}

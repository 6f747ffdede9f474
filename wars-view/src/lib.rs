//! Presentation layer: color-keyed picking, the map display list, the
//! phase-driven control projection and input routing.
//!
//! Nothing here touches the DOM, so the whole loop runs natively under test.

pub mod config;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod picking;
pub mod renderer;
pub mod router;
pub mod session;
pub mod snapshot;

pub use config::ViewConfig;
pub use controls::{ControllerState, ControlsView, PhaseController, PlacementControls, SelectorModel};
pub use error::{ConfigError, PickError};
pub use geometry::{ArrowGeometry, Point};
pub use picking::ColorPicker;
pub use renderer::{DrawCommand, Frame, MapRenderer};
pub use router::{ControlEvent, InputRouter, Redraw};
pub use session::{RenderPass, Session};
pub use snapshot::{FrameSnapshot, TerritoryView};

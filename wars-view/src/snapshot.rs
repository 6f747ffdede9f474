use wars_core::{Engine, Phase, Rgb, TerritoryId};

use crate::geometry::{Point, canvas_size, grid_to_px};

#[derive(Clone, Debug, PartialEq)]
pub struct TerritoryView {
    pub id: TerritoryId,
    pub outline: Vec<Point>,
    pub center: Point,
    pub fill: Rgb,
    pub highlighted: bool,
    pub troops: u32,
}

/// Everything one frame needs, read from the engine in a single pass.
///
/// Rendering and control projection consume only this, so a frame never
/// mixes state from before and after an engine mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub territories: Vec<TerritoryView>,
    /// Source and target centers of a pending attack or fortify.
    pub pending_arrow: Option<(Point, Point)>,
    pub phase: Phase,
    pub game_over: bool,
    pub winner: Option<usize>,
    pub current_player: usize,
    pub target_selected: bool,
    pub troops_available_for_placement: u32,
    pub troops_staged_for_placement: u32,
    pub troops_to_place: u32,
    pub troops_available_for_movement: u32,
}

impl FrameSnapshot {
    pub fn capture<E: Engine + ?Sized>(engine: &E, scale: f64) -> Self {
        let width = engine.width();
        let (canvas_width, canvas_height) = canvas_size(width, engine.height(), scale);
        let to_px = |v: u32| grid_to_px(v, width, scale);

        let territories = (0..engine.territory_count())
            .map(|t| TerritoryView {
                id: t,
                outline: engine.vertices_for(t).iter().map(|&v| to_px(v)).collect(),
                center: to_px(engine.center_for(t)),
                fill: engine.color_for(t),
                highlighted: engine.is_highlighted(t),
                troops: engine.troops_for(t),
            })
            .collect();

        let game_over = engine.is_game_over();
        FrameSnapshot {
            canvas_width,
            canvas_height,
            territories,
            pending_arrow: engine
                .pending_movement()
                .map(|(from, to)| (to_px(from), to_px(to))),
            phase: engine.phase(),
            game_over,
            winner: if game_over {
                engine.active_players().first().copied()
            } else {
                None
            },
            current_player: engine.current_player(),
            target_selected: engine.target_selected(),
            troops_available_for_placement: engine.troops_available_for_placement(),
            troops_staged_for_placement: engine.troops_staged_for_placement(),
            troops_to_place: engine.troops_to_place(),
            troops_available_for_movement: engine.troops_available_for_movement(),
        }
    }
}

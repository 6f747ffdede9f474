use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::palette;

/// Index of a territory, valid in `[0, territory_count)`.
pub type TerritoryId = usize;

/// A 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// CSS hex notation, e.g. `#aa1111`.
    pub fn css(self) -> String {
        format!("#{:06x}", self.0 & 0xFF_FFFF)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Turn phase as reported to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Place,
    Attack,
    Fortify,
}

/// Integer map-grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    /// Vertex `v` lives at `(v mod width, v div width)`.
    pub fn from_index(v: u32, width: u32) -> Self {
        let w = width.max(1);
        GridPoint { x: v % w, y: v / w }
    }

    pub fn to_index(self, width: u32) -> u32 {
        self.y * width + self.x
    }
}

/// Query/command surface of the game engine consumed by the presentation
/// layer. The engine is the single source of truth for every value here;
/// callers never cache results across frames.
pub trait Engine {
    // --- map queries ---
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn territory_count(&self) -> usize;
    /// Boundary polygon as grid vertex indices.
    fn vertices_for(&self, t: TerritoryId) -> &[u32];
    /// Grid vertex index of the territory's label anchor.
    fn center_for(&self, t: TerritoryId) -> u32;
    /// Gameplay fill color (usually the owner's color).
    fn color_for(&self, t: TerritoryId) -> Rgb;
    /// Color of everything that is not a territory on the picking surface.
    fn background_color(&self) -> Rgb;
    fn is_highlighted(&self, t: TerritoryId) -> bool;
    /// Displayed troop count, including troops staged for placement.
    fn troops_for(&self, t: TerritoryId) -> u32;

    fn pick_color_for(&self, t: TerritoryId) -> Rgb {
        palette::pick_color(t, self.background_color())
    }

    fn territory_with_pick_color(&self, color: Rgb) -> Option<TerritoryId> {
        palette::index_for_pick_color(color, self.background_color(), self.territory_count())
    }

    // --- phase queries ---
    fn phase(&self) -> Phase;
    fn is_game_over(&self) -> bool;
    fn active_players(&self) -> Vec<usize>;
    fn current_player(&self) -> usize;

    fn is_place_phase(&self) -> bool {
        self.phase() == Phase::Place
    }

    fn is_attack_phase(&self) -> bool {
        self.phase() == Phase::Attack
    }

    fn is_fortify_phase(&self) -> bool {
        self.phase() == Phase::Fortify
    }

    // --- selection / movement queries ---
    fn target_selected(&self) -> bool;
    fn troops_available_for_placement(&self) -> u32;
    fn troops_staged_for_placement(&self) -> u32;
    /// Troops staged by one placement click.
    fn troops_to_place(&self) -> u32;
    /// Troops on the selected source territory, 0 without a source.
    fn troops_available_for_movement(&self) -> u32;
    /// Center vertices of the selected source and target, if both exist.
    fn pending_movement(&self) -> Option<(u32, u32)>;

    fn troops_available_for_attack(&self) -> u32 {
        self.troops_available_for_movement().saturating_sub(1)
    }

    fn troops_available_for_fortify(&self) -> u32 {
        self.troops_available_for_movement().saturating_sub(1)
    }

    // --- mutators ---
    /// Routes a click on `t` through the engine's selection rules; returns
    /// whether anything changed.
    fn click_action(&mut self, t: TerritoryId) -> bool;
    fn enter_place_phase(&mut self) -> Result<(), CommandError>;
    fn enter_attack_phase(&mut self) -> Result<(), CommandError>;
    fn enter_fortify_phase(&mut self) -> Result<(), CommandError>;
    fn clear_placement(&mut self);
    fn commit_placement(&mut self) -> Result<(), CommandError>;
    fn set_troops_to_place(&mut self, troops: u32) -> Result<(), CommandError>;
    fn attack_with(&mut self, troops: u32) -> Result<(), CommandError>;
    fn attack_to_exhaustion(&mut self) -> Result<(), CommandError>;
    fn attack_all(&mut self) -> Result<(), CommandError>;
    fn fortify_with(&mut self, troops: u32) -> Result<(), CommandError>;
    fn fortify_all(&mut self) -> Result<(), CommandError>;
    fn unselect_all(&mut self);
    fn end_turn(&mut self) -> Result<(), CommandError>;
}

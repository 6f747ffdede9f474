use crate::engine::{Rgb, TerritoryId};

/// Selection state of a single territory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerritoryState {
    #[default]
    Dormant,
    /// Source of the pending action.
    Selected,
    /// Target of the pending action.
    Targeted,
    /// Legal target candidate.
    Highlighted,
}

/// Runtime territory: immutable geometry from the map plus mutable game
/// attributes.
#[derive(Clone, Debug)]
pub struct Territory {
    pub name: String,
    pub(crate) vertices: Vec<u32>,
    pub center: u32,
    pub(crate) neighbors: Vec<TerritoryId>,
    pub color: Rgb,
    pub troops: u32,
    pub(crate) state: TerritoryState,
}

impl Territory {
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    pub fn neighbors(&self) -> &[TerritoryId] {
        &self.neighbors
    }

    pub fn state(&self) -> TerritoryState {
        self.state
    }

    pub fn is_selected(&self) -> bool {
        self.state == TerritoryState::Selected
    }

    pub fn is_targeted(&self) -> bool {
        self.state == TerritoryState::Targeted
    }

    /// Anything that is not dormant gets a halo.
    pub fn is_highlighted(&self) -> bool {
        self.state != TerritoryState::Dormant
    }

    pub fn is_adjacent(&self, other: TerritoryId) -> bool {
        self.neighbors.contains(&other)
    }
}

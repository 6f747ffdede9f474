use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::{Rgb, TerritoryId};
use crate::error::MapError;
use crate::territory::{Territory, TerritoryState};

/// Territory entry of a map document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TerritoryDef {
    #[serde(default)]
    pub name: String,
    /// Boundary ring as grid vertex indices. A trailing repeat of the first
    /// vertex is allowed.
    pub vertices: Vec<u32>,
    pub center: u32,
    #[serde(default)]
    pub neighbors: Vec<TerritoryId>,
    #[serde(default = "default_troops")]
    pub troops: u32,
}

fn default_troops() -> u32 {
    1
}

/// Map document supplied by the map provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background_color: Rgb,
    pub territories: Vec<TerritoryDef>,
}

impl MapData {
    pub fn from_json(text: &str) -> Result<Self, MapError> {
        let data: MapData = serde_json::from_str(text)?;
        data.validate()?;
        Ok(data)
    }

    /// The bundled five-territory map.
    pub fn classic() -> Result<Self, MapError> {
        Self::from_json(include_str!("../maps/classic.json"))
    }

    pub fn validate(&self) -> Result<(), MapError> {
        if self.territories.is_empty() {
            return Err(MapError::Empty);
        }
        if self.width < 2 || self.height < 2 {
            return Err(MapError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        // Vertex indices are u32, so the whole grid must be addressable by one.
        let cells = self
            .width
            .checked_mul(self.height)
            .ok_or(MapError::GridTooLarge {
                width: self.width,
                height: self.height,
            })?;
        let count = self.territories.len();
        for (i, t) in self.territories.iter().enumerate() {
            if let Some(&vertex) = t.vertices.iter().find(|&&v| v >= cells) {
                return Err(MapError::VertexOutOfRange {
                    territory: i,
                    vertex,
                });
            }
            let distinct: HashSet<u32> = t.vertices.iter().copied().collect();
            if distinct.len() < 3 {
                return Err(MapError::DegeneratePolygon(i));
            }
            if t.center >= cells {
                return Err(MapError::CenterOutOfRange {
                    territory: i,
                    center: t.center,
                });
            }
            for &n in &t.neighbors {
                if n >= count {
                    return Err(MapError::UnknownNeighbor {
                        territory: i,
                        neighbor: n,
                    });
                }
                if n == i {
                    return Err(MapError::SelfNeighbor(i));
                }
                if !self.territories[n].neighbors.contains(&i) {
                    return Err(MapError::AsymmetricNeighbor { a: i, b: n });
                }
            }
        }
        Ok(())
    }
}

/// Live map state owned by the engine.
#[derive(Clone, Debug)]
pub struct Map {
    pub width: u32,
    pub height: u32,
    pub background_color: Rgb,
    pub(crate) territories: Vec<Territory>,
}

impl Map {
    pub fn new(data: &MapData) -> Self {
        let territories = data
            .territories
            .iter()
            .map(|def| {
                let mut vertices = def.vertices.clone();
                if vertices.len() > 1 && vertices.first() == vertices.last() {
                    vertices.pop();
                }
                Territory {
                    name: def.name.clone(),
                    vertices,
                    center: def.center,
                    neighbors: def.neighbors.clone(),
                    color: Rgb::default(),
                    troops: def.troops,
                    state: TerritoryState::Dormant,
                }
            })
            .collect();
        Map {
            width: data.width,
            height: data.height,
            background_color: data.background_color,
            territories,
        }
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    pub fn territory(&self, t: TerritoryId) -> Option<&Territory> {
        self.territories.get(t)
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn selected_index(&self) -> Option<TerritoryId> {
        self.territories.iter().position(|t| t.is_selected())
    }

    pub fn targeted_index(&self) -> Option<TerritoryId> {
        self.territories.iter().position(|t| t.is_targeted())
    }

    pub(crate) fn set_state(&mut self, t: TerritoryId, state: TerritoryState) {
        if let Some(territory) = self.territories.get_mut(t) {
            territory.state = state;
        }
    }

    pub(crate) fn unselect_all(&mut self) {
        for t in &mut self.territories {
            t.state = TerritoryState::Dormant;
        }
    }
}

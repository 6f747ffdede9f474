use crate::engine::{Rgb, TerritoryId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub index: usize,
    pub color: Rgb,
    pub(crate) territories: Vec<TerritoryId>,
}

impl Player {
    pub fn new(index: usize, color: Rgb) -> Self {
        Player {
            index,
            color,
            territories: Vec::new(),
        }
    }

    pub fn territories(&self) -> &[TerritoryId] {
        &self.territories
    }

    pub fn owns(&self, t: TerritoryId) -> bool {
        self.territories.contains(&t)
    }

    pub fn capture_territory(&mut self, t: TerritoryId) {
        if !self.owns(t) {
            self.territories.push(t);
        }
    }

    pub fn lose_territory(&mut self, t: TerritoryId) {
        self.territories.retain(|&x| x != t);
    }

    pub fn is_eliminated(&self) -> bool {
        self.territories.is_empty()
    }
}

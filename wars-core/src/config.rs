use serde::{Deserialize, Serialize};

/// Rules knobs for the reference engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats; territories are dealt round-robin.
    pub players: usize,
    /// Reinforcements granted at turn start when `owned / 3` is smaller.
    pub min_reinforcements: u32,
    /// Seed for combat dice.
    pub dice_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: 2,
            min_reinforcements: 5,
            dice_seed: 0x5EED_CAFE,
        }
    }
}

//! Rules engine and map data for a territory-conquest board game.
//!
//! The presentation layer talks to the game exclusively through the
//! [`Engine`] trait; [`Game`] is the reference implementation.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod map;
pub mod palette;
pub mod player;
pub mod rng;
pub mod territory;

pub use config::GameConfig;
pub use engine::{Engine, GridPoint, Phase, Rgb, TerritoryId};
pub use error::{CommandError, MapError};
pub use game::Game;
pub use map::{Map, MapData, TerritoryDef};
pub use player::Player;
pub use territory::{Territory, TerritoryState};

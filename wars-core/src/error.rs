use thiserror::Error;

use crate::engine::{Phase, TerritoryId};

/// Reasons the engine refuses a command. The presentation layer treats every
/// variant as a no-op that does not trigger a redraw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("the game is over")]
    GameOver,
    #[error("command requires the {expected:?} phase")]
    WrongPhase { expected: Phase },
    #[error("no placement troops remain this turn")]
    PlacementExhausted,
    #[error("no troops are staged for placement")]
    NothingStaged,
    #[error("a source and a target territory must be selected")]
    NoSelection,
    #[error("requested {requested} troops but only {available} are available")]
    NotEnoughTroops { requested: u32, available: u32 },
    #[error("troop count must be at least one")]
    ZeroTroops,
    #[error("finish moving troops into the conquered territory first")]
    MovePending,
}

/// Problems found while loading or validating map data.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map has no territories")]
    Empty,
    #[error("map grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: u32, height: u32 },
    #[error("map grid {width}x{height} has more vertices than fit in u32")]
    GridTooLarge { width: u32, height: u32 },
    #[error("territory {0} has fewer than three distinct vertices")]
    DegeneratePolygon(TerritoryId),
    #[error("territory {territory} references vertex {vertex} outside the grid")]
    VertexOutOfRange { territory: TerritoryId, vertex: u32 },
    #[error("territory {territory} has center {center} outside the grid")]
    CenterOutOfRange { territory: TerritoryId, center: u32 },
    #[error("territory {territory} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { territory: TerritoryId, neighbor: TerritoryId },
    #[error("territory {0} lists itself as a neighbor")]
    SelfNeighbor(TerritoryId),
    #[error("adjacency {a} -> {b} is not mirrored")]
    AsymmetricNeighbor { a: TerritoryId, b: TerritoryId },
}

#![allow(dead_code)]

use wars_core::{Game, GameConfig, MapData, Rgb, TerritoryDef};
use wars_view::{Session, ViewConfig};

/// `cols x rows` square territories of `cell` grid units, 4-connected, with
/// one spare grid column on the right left as background.
pub fn grid_map(cols: u32, rows: u32, cell: u32, troops: u32, background: Rgb) -> MapData {
    let width = cols * cell + 2;
    let height = rows * cell + 1;
    let at = |x: u32, y: u32| y * width + x;
    let index = |c: u32, r: u32| (r * cols + c) as usize;

    let mut territories = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let (x0, y0) = (c * cell, r * cell);
            let mut neighbors = Vec::new();
            if c > 0 {
                neighbors.push(index(c - 1, r));
            }
            if c + 1 < cols {
                neighbors.push(index(c + 1, r));
            }
            if r > 0 {
                neighbors.push(index(c, r - 1));
            }
            if r + 1 < rows {
                neighbors.push(index(c, r + 1));
            }
            territories.push(TerritoryDef {
                name: format!("r{r}c{c}"),
                vertices: vec![
                    at(x0, y0),
                    at(x0 + cell, y0),
                    at(x0 + cell, y0 + cell),
                    at(x0, y0 + cell),
                ],
                center: at(x0 + cell / 2, y0 + cell / 2),
                neighbors,
                troops,
            });
        }
    }
    MapData {
        width,
        height,
        background_color: background,
        territories,
    }
}

/// Six territories in a 3x2 block:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// ```
///
/// Two players: even ids belong to player 0, odd ids to player 1.
pub fn six_territory_session(troops: u32) -> Session<Game> {
    let game = Game::new(&grid_map(3, 2, 2, troops, Rgb(0)), GameConfig::default())
        .expect("valid grid map");
    Session::new(game, ViewConfig::default()).expect("picking surface")
}

/// The bundled map: player 0 holds 0, 2 and 4, which form a friendly chain
/// through 2.
pub fn classic_session() -> Session<Game> {
    let data = MapData::classic().expect("bundled map");
    let game = Game::new(&data, GameConfig::default()).expect("bundled map builds a game");
    Session::new(game, ViewConfig::default()).expect("picking surface")
}

/// Canvas pixel at the center of territory `t` in a session.
pub fn center_px(session: &Session<Game>, t: usize) -> (f64, f64) {
    let snap = session.snapshot();
    let c = snap.territories[t].center;
    (c.x, c.y)
}

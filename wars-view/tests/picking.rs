mod common;

use proptest::prelude::*;
use wars_core::{Engine, Game, GameConfig, MapData, Rgb};
use wars_view::{ColorPicker, PickError, ViewConfig};

use common::grid_map;

fn picker_for(data: &MapData, scale: f64) -> (Game, ColorPicker) {
    let game = Game::new(data, GameConfig::default()).expect("valid map");
    let config = ViewConfig {
        map_scale: scale,
        ..ViewConfig::default()
    };
    let picker = ColorPicker::build(&game, &config).expect("picker");
    (game, picker)
}

#[test]
fn classic_centers_resolve_to_their_territory() {
    let (game, picker) = picker_for(&MapData::classic().unwrap(), 20.0);
    assert_eq!((picker.width(), picker.height()), (300, 300));
    for t in 0..game.territory_count() {
        let c = game.center_for(t);
        let (x, y) = ((c % 16) as f64 * 20.0, (c / 16) as f64 * 20.0);
        assert_eq!(picker.pick(x, y), Some(t), "territory {t}");
        let sampled = picker.sample(x as u32, y as u32).unwrap();
        assert_eq!(game.territory_with_pick_color(sampled), Some(t));
    }
}

#[test]
fn surface_holds_pick_colors_not_gameplay_colors() {
    let (game, picker) = picker_for(&grid_map(2, 1, 2, 3, Rgb(0x102030)), 20.0);
    assert_eq!(picker.sample(20, 20), Some(Rgb(0x102031)));
    assert_eq!(picker.sample(60, 20), Some(Rgb(0x102032)));
    assert_ne!(picker.sample(20, 20), Some(game.color_for(0)));
}

#[test]
fn background_and_off_surface_points_miss() {
    let (_, picker) = picker_for(&grid_map(3, 2, 2, 3, Rgb(0)), 20.0);
    // Spare grid column to the right of the territories.
    assert_eq!(picker.pick(130.0, 40.0), None);
    assert_eq!(picker.pick(-1.0, 10.0), None);
    assert_eq!(picker.pick(10.0, 500.0), None);
    assert_eq!(picker.pick(f64::NAN, 10.0), None);
}

/// Engine stub that hands out one pick color twice.
struct Colliding(Game);

impl Engine for Colliding {
    fn width(&self) -> u32 { self.0.width() }
    fn height(&self) -> u32 { self.0.height() }
    fn territory_count(&self) -> usize { self.0.territory_count() }
    fn vertices_for(&self, t: usize) -> &[u32] { self.0.vertices_for(t) }
    fn center_for(&self, t: usize) -> u32 { self.0.center_for(t) }
    fn color_for(&self, t: usize) -> Rgb { self.0.color_for(t) }
    fn background_color(&self) -> Rgb { self.0.background_color() }
    fn is_highlighted(&self, t: usize) -> bool { self.0.is_highlighted(t) }
    fn troops_for(&self, t: usize) -> u32 { self.0.troops_for(t) }
    fn pick_color_for(&self, _t: usize) -> Rgb { Rgb(7) }
    fn phase(&self) -> wars_core::Phase { self.0.phase() }
    fn is_game_over(&self) -> bool { self.0.is_game_over() }
    fn active_players(&self) -> Vec<usize> { self.0.active_players() }
    fn current_player(&self) -> usize { self.0.current_player() }
    fn target_selected(&self) -> bool { self.0.target_selected() }
    fn troops_available_for_placement(&self) -> u32 { self.0.troops_available_for_placement() }
    fn troops_staged_for_placement(&self) -> u32 { self.0.troops_staged_for_placement() }
    fn troops_to_place(&self) -> u32 { self.0.troops_to_place() }
    fn troops_available_for_movement(&self) -> u32 { self.0.troops_available_for_movement() }
    fn pending_movement(&self) -> Option<(u32, u32)> { self.0.pending_movement() }
    fn click_action(&mut self, t: usize) -> bool { self.0.click_action(t) }
    fn enter_place_phase(&mut self) -> Result<(), wars_core::CommandError> { self.0.enter_place_phase() }
    fn enter_attack_phase(&mut self) -> Result<(), wars_core::CommandError> { self.0.enter_attack_phase() }
    fn enter_fortify_phase(&mut self) -> Result<(), wars_core::CommandError> { self.0.enter_fortify_phase() }
    fn clear_placement(&mut self) { self.0.clear_placement() }
    fn commit_placement(&mut self) -> Result<(), wars_core::CommandError> { self.0.commit_placement() }
    fn set_troops_to_place(&mut self, n: u32) -> Result<(), wars_core::CommandError> { self.0.set_troops_to_place(n) }
    fn attack_with(&mut self, n: u32) -> Result<(), wars_core::CommandError> { self.0.attack_with(n) }
    fn attack_to_exhaustion(&mut self) -> Result<(), wars_core::CommandError> { self.0.attack_to_exhaustion() }
    fn attack_all(&mut self) -> Result<(), wars_core::CommandError> { self.0.attack_all() }
    fn fortify_with(&mut self, n: u32) -> Result<(), wars_core::CommandError> { self.0.fortify_with(n) }
    fn fortify_all(&mut self) -> Result<(), wars_core::CommandError> { self.0.fortify_all() }
    fn unselect_all(&mut self) { self.0.unselect_all() }
    fn end_turn(&mut self) -> Result<(), wars_core::CommandError> { self.0.end_turn() }
}

#[test]
fn duplicate_pick_colors_are_refused() {
    let game = Game::new(&grid_map(2, 1, 2, 3, Rgb(0)), GameConfig::default()).unwrap();
    let err = ColorPicker::build(&Colliding(game), &ViewConfig::default()).err();
    assert_eq!(
        err,
        Some(PickError::DuplicatePickColor {
            color: Rgb(7),
            first: 0,
            second: 1
        })
    );
}

#[test]
fn background_pick_color_is_refused() {
    let data = grid_map(1, 1, 2, 3, Rgb(7));
    let game = Game::new(&data, GameConfig::default()).unwrap();
    assert!(matches!(
        ColorPicker::build(&Colliding(game), &ViewConfig::default()),
        Err(PickError::BackgroundCollision { territory: 0, .. })
    ));
}

proptest! {
    #[test]
    fn every_center_picks_its_own_territory(
        cols in 1u32..5,
        rows in 1u32..4,
        cell in 2u32..5,
        scale in 1u32..25,
        background in 0u32..0x100_0000,
    ) {
        let data = grid_map(cols, rows, cell, 2, Rgb(background));
        let (game, picker) = picker_for(&data, scale as f64);
        let s = scale as f64;
        for t in 0..game.territory_count() {
            let c = game.center_for(t);
            let (x, y) = ((c % data.width) as f64 * s, (c / data.width) as f64 * s);
            prop_assert_eq!(picker.pick(x, y), Some(t));
        }
        // The spare column is pure background.
        let x = picker.width() - 1;
        for y in 0..picker.height() {
            prop_assert_eq!(picker.pick(x as f64, y as f64), None);
        }
    }

    #[test]
    fn pick_colors_are_injective(count in 1usize..64, background in 0u32..0x100_0000) {
        let data = grid_map(count as u32, 1, 2, 2, Rgb(background));
        let game = Game::new(&data, GameConfig::default()).unwrap();
        let mut seen = std::collections::HashSet::new();
        for t in 0..game.territory_count() {
            let color = game.pick_color_for(t);
            prop_assert_ne!(color, Rgb(background));
            prop_assert!(seen.insert(color));
            prop_assert_eq!(game.territory_with_pick_color(color), Some(t));
        }
    }
}

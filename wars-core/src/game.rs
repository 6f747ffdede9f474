use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{Engine, Phase, Rgb, TerritoryId};
use crate::error::{CommandError, MapError};
use crate::map::{Map, MapData};
use crate::palette::player_color;
use crate::player::Player;
use crate::rng::DiceRng;
use crate::territory::{Territory, TerritoryState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnPhase {
    Place,
    Attack,
    Fortify,
    /// Survivors may follow into a freshly conquered territory.
    PostAttackFortify,
}

#[derive(Clone, Debug)]
struct Turn {
    player: usize,
    phase: TurnPhase,
    new_troops: u32,
    troops_to_place: u32,
}

/// How far the survivors of a won battle advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Advance {
    /// Up to three move in; the rest may follow in a post-conquest move.
    Partial,
    /// Everything but one troop moves in and the selection ends.
    Exhaust,
}

/// Reference rules engine.
#[derive(Clone, Debug)]
pub struct Game {
    map: Map,
    players: Vec<Player>,
    turn: Turn,
    placement_cache: BTreeMap<TerritoryId, u32>,
    rng: DiceRng,
    config: GameConfig,
}

impl Game {
    pub fn new(data: &MapData, config: GameConfig) -> Result<Self, MapError> {
        data.validate()?;
        let players = (0..config.players.max(1))
            .map(|i| Player::new(i, player_color(i)))
            .collect();
        let mut game = Game {
            map: Map::new(data),
            players,
            turn: Turn {
                player: 0,
                phase: TurnPhase::Place,
                new_troops: 0,
                troops_to_place: 1,
            },
            placement_cache: BTreeMap::new(),
            rng: DiceRng::seed_from_u64(config.dice_seed),
            config,
        };
        game.assign_territories();
        game.update_colors();
        game.turn.new_troops = game.reinforcements(0);
        info!(
            territories = game.map.territory_count(),
            players = game.players.len(),
            "game started"
        );
        Ok(game)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn owner_of(&self, t: TerritoryId) -> Option<usize> {
        self.players.iter().position(|p| p.owns(t))
    }

    /// Deals territories round-robin in index order.
    fn assign_territories(&mut self) {
        let n = self.players.len();
        for t in 0..self.map.territory_count() {
            self.players[t % n].capture_territory(t);
        }
    }

    fn update_colors(&mut self) {
        for player in &self.players {
            for &t in &player.territories {
                if let Some(territory) = self.map.territories.get_mut(t) {
                    territory.color = player.color;
                }
            }
        }
    }

    fn reinforcements(&self, player: usize) -> u32 {
        let owned = self
            .players
            .get(player)
            .map(|p| p.territories.len() as u32)
            .unwrap_or(0);
        (owned / 3).max(self.config.min_reinforcements)
    }

    fn on_player(&self) -> &Player {
        &self.players[self.turn.player]
    }

    fn territory(&self, t: TerritoryId) -> Option<&Territory> {
        self.map.territories.get(t)
    }

    fn troops_staged(&self) -> u32 {
        self.placement_cache.values().sum()
    }

    fn change_phase(&mut self, phase: TurnPhase) -> Result<(), CommandError> {
        if self.is_game_over() {
            return Err(CommandError::GameOver);
        }
        if self.turn.phase == TurnPhase::PostAttackFortify {
            return Err(CommandError::MovePending);
        }
        if phase == TurnPhase::Place && self.turn.new_troops == 0 {
            return Err(CommandError::PlacementExhausted);
        }
        self.placement_cache.clear();
        self.map.unselect_all();
        self.turn.phase = phase;
        info!(player = self.turn.player, phase = ?phase, "phase changed");
        Ok(())
    }

    fn click_place(&mut self, t: TerritoryId, owned: bool) -> bool {
        let per_click = self.turn.troops_to_place.max(1);
        if !owned || self.troops_staged() + per_click > self.turn.new_troops {
            return false;
        }
        *self.placement_cache.entry(t).or_insert(0) += per_click;
        self.map.set_state(t, TerritoryState::Selected);
        true
    }

    fn click_attack(&mut self, t: TerritoryId, owned: bool) -> bool {
        let selected = self.map.selected_index();
        if owned {
            return match selected {
                None => self.select_source(t, false),
                Some(s) if s == t => {
                    self.map.unselect_all();
                    true
                }
                Some(_) => false,
            };
        }
        if self.map.territories[t].state() != TerritoryState::Highlighted {
            return false;
        }
        let owned_by_player = self.on_player().territories.clone();
        for (i, territory) in self.map.territories.iter_mut().enumerate() {
            if !owned_by_player.contains(&i) {
                territory.state = TerritoryState::Dormant;
            }
        }
        self.map.set_state(t, TerritoryState::Targeted);
        true
    }

    fn click_fortify(&mut self, t: TerritoryId, owned: bool) -> bool {
        if !owned {
            return false;
        }
        match self.map.selected_index() {
            None => self.select_source(t, true),
            Some(s) if s == t => {
                self.map.unselect_all();
                true
            }
            Some(_) => {
                if self.map.territories[t].state() != TerritoryState::Highlighted {
                    return false;
                }
                if let Some(previous) = self.map.targeted_index() {
                    self.map.set_state(previous, TerritoryState::Highlighted);
                }
                self.map.set_state(t, TerritoryState::Targeted);
                true
            }
        }
    }

    /// Selects `t` as source and highlights neighbors owned (`friendly`) or
    /// not owned by the current player.
    fn select_source(&mut self, t: TerritoryId, friendly: bool) -> bool {
        if self.map.territories[t].troops < 2 {
            return false;
        }
        self.map.set_state(t, TerritoryState::Selected);
        let neighbors = self.map.territories[t].neighbors().to_vec();
        for n in neighbors {
            if self.on_player().owns(n) == friendly {
                self.map.set_state(n, TerritoryState::Highlighted);
            }
        }
        true
    }

    fn attack_pair(&self) -> Result<(TerritoryId, TerritoryId), CommandError> {
        if self.is_game_over() {
            return Err(CommandError::GameOver);
        }
        if self.turn.phase != TurnPhase::Attack {
            return Err(CommandError::WrongPhase {
                expected: Phase::Attack,
            });
        }
        match (self.map.selected_index(), self.map.targeted_index()) {
            (Some(s), Some(t)) => Ok((s, t)),
            _ => Err(CommandError::NoSelection),
        }
    }

    fn check_troops(requested: u32, available: u32) -> Result<(), CommandError> {
        if requested == 0 {
            return Err(CommandError::ZeroTroops);
        }
        if requested > available {
            return Err(CommandError::NotEnoughTroops {
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Rolls rounds until one side runs out; returns the survivors
    /// `(attackers, defenders)`.
    fn battle(&mut self, mut attackers: u32, mut defenders: u32) -> (u32, u32) {
        while attackers > 0 && defenders > 0 {
            let attack = self.rng.roll_sorted(attackers.min(3));
            let defend = self.rng.roll_sorted(defenders.min(2));
            for (a, d) in attack.iter().zip(defend.iter()) {
                if a > d {
                    defenders -= 1;
                } else {
                    attackers -= 1;
                }
            }
        }
        (attackers, defenders)
    }

    fn resolve_attack(&mut self, committed: Option<u32>, advance: Advance) -> Result<(), CommandError> {
        let (src, dst) = self.attack_pair()?;
        let available = self.map.territories[src].troops.saturating_sub(1);
        let committed = committed.unwrap_or(available);
        Self::check_troops(committed, available)?;

        let reserves = self.map.territories[src].troops - committed;
        let defenders = self.map.territories[dst].troops;
        let (survivors, remaining) = self.battle(committed, defenders);
        debug!(src, dst, committed, survivors, remaining, "battle resolved");

        if remaining == 0 {
            let moved = match advance {
                Advance::Partial => survivors.min(3),
                Advance::Exhaust => survivors,
            };
            self.map.territories[src].troops = reserves + survivors - moved;
            self.map.territories[dst].troops = moved;
            self.capture(dst);
            if advance == Advance::Exhaust || self.map.territories[src].troops <= 1 {
                self.map.unselect_all();
            } else {
                self.turn.phase = TurnPhase::PostAttackFortify;
            }
        } else {
            self.map.territories[src].troops = reserves + survivors;
            self.map.territories[dst].troops = remaining;
            if advance == Advance::Exhaust || self.map.territories[src].troops <= 1 {
                self.map.unselect_all();
            }
        }
        Ok(())
    }

    fn capture(&mut self, t: TerritoryId) {
        let player = self.turn.player;
        let previous = self.owner_of(t);
        if let Some(prev) = previous {
            self.players[prev].lose_territory(t);
        }
        self.players[player].capture_territory(t);
        self.update_colors();
        info!(territory = t, player, previous = ?previous, "territory captured");
        if self.is_game_over() {
            info!(winner = player, "game over");
        }
    }

    fn move_troops(&mut self, requested: Option<u32>) -> Result<(), CommandError> {
        if self.is_game_over() {
            return Err(CommandError::GameOver);
        }
        if !matches!(
            self.turn.phase,
            TurnPhase::Fortify | TurnPhase::PostAttackFortify
        ) {
            return Err(CommandError::WrongPhase {
                expected: Phase::Fortify,
            });
        }
        let (src, dst) = match (self.map.selected_index(), self.map.targeted_index()) {
            (Some(s), Some(t)) => (s, t),
            _ => return Err(CommandError::NoSelection),
        };
        let available = self.map.territories[src].troops.saturating_sub(1);
        let troops = requested.unwrap_or(available);
        Self::check_troops(troops, available)?;

        self.map.territories[src].troops -= troops;
        self.map.territories[dst].troops += troops;
        if self.turn.phase == TurnPhase::PostAttackFortify {
            self.turn.phase = TurnPhase::Attack;
        }
        self.map.unselect_all();
        Ok(())
    }
}

impl Engine for Game {
    fn width(&self) -> u32 {
        self.map.width
    }

    fn height(&self) -> u32 {
        self.map.height
    }

    fn territory_count(&self) -> usize {
        self.map.territory_count()
    }

    fn vertices_for(&self, t: TerritoryId) -> &[u32] {
        self.territory(t).map(Territory::vertices).unwrap_or(&[])
    }

    fn center_for(&self, t: TerritoryId) -> u32 {
        self.territory(t).map(|x| x.center).unwrap_or(0)
    }

    fn color_for(&self, t: TerritoryId) -> Rgb {
        self.territory(t).map(|x| x.color).unwrap_or_default()
    }

    fn background_color(&self) -> Rgb {
        self.map.background_color
    }

    fn is_highlighted(&self, t: TerritoryId) -> bool {
        self.territory(t).is_some_and(Territory::is_highlighted)
    }

    fn troops_for(&self, t: TerritoryId) -> u32 {
        let staged = self.placement_cache.get(&t).copied().unwrap_or(0);
        self.territory(t).map(|x| x.troops).unwrap_or(0) + staged
    }

    fn phase(&self) -> Phase {
        match self.turn.phase {
            TurnPhase::Place => Phase::Place,
            TurnPhase::Attack => Phase::Attack,
            TurnPhase::Fortify | TurnPhase::PostAttackFortify => Phase::Fortify,
        }
    }

    fn is_game_over(&self) -> bool {
        self.active_players().len() <= 1
    }

    fn active_players(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| !p.is_eliminated())
            .map(|p| p.index)
            .collect()
    }

    fn current_player(&self) -> usize {
        self.turn.player
    }

    fn target_selected(&self) -> bool {
        self.map.targeted_index().is_some()
    }

    fn troops_available_for_placement(&self) -> u32 {
        self.turn.new_troops
    }

    fn troops_staged_for_placement(&self) -> u32 {
        self.troops_staged()
    }

    fn troops_to_place(&self) -> u32 {
        self.turn.troops_to_place
    }

    fn troops_available_for_movement(&self) -> u32 {
        self.map
            .selected_index()
            .map(|s| self.map.territories[s].troops)
            .unwrap_or(0)
    }

    fn pending_movement(&self) -> Option<(u32, u32)> {
        let src = self.map.selected_index()?;
        let dst = self.map.targeted_index()?;
        Some((self.map.territories[src].center, self.map.territories[dst].center))
    }

    fn click_action(&mut self, t: TerritoryId) -> bool {
        if t >= self.map.territory_count() || self.is_game_over() {
            return false;
        }
        let owned = self.on_player().owns(t);
        match self.turn.phase {
            TurnPhase::Place => self.click_place(t, owned),
            TurnPhase::Attack => self.click_attack(t, owned),
            TurnPhase::Fortify => self.click_fortify(t, owned),
            TurnPhase::PostAttackFortify => false,
        }
    }

    fn enter_place_phase(&mut self) -> Result<(), CommandError> {
        self.change_phase(TurnPhase::Place)
    }

    fn enter_attack_phase(&mut self) -> Result<(), CommandError> {
        self.change_phase(TurnPhase::Attack)
    }

    fn enter_fortify_phase(&mut self) -> Result<(), CommandError> {
        self.change_phase(TurnPhase::Fortify)
    }

    fn clear_placement(&mut self) {
        self.placement_cache.clear();
        self.map.unselect_all();
    }

    fn commit_placement(&mut self) -> Result<(), CommandError> {
        if self.is_game_over() {
            return Err(CommandError::GameOver);
        }
        if self.turn.phase != TurnPhase::Place {
            return Err(CommandError::WrongPhase {
                expected: Phase::Place,
            });
        }
        if self.placement_cache.is_empty() {
            return Err(CommandError::NothingStaged);
        }
        let placed = self.troops_staged();
        for (t, troops) in std::mem::take(&mut self.placement_cache) {
            self.map.territories[t].troops += troops;
        }
        self.turn.new_troops = self.turn.new_troops.saturating_sub(placed);
        self.turn.troops_to_place = self.turn.troops_to_place.min(self.turn.new_troops).max(1);
        self.map.unselect_all();
        info!(
            player = self.turn.player,
            placed,
            remaining = self.turn.new_troops,
            "placement committed"
        );
        Ok(())
    }

    fn set_troops_to_place(&mut self, troops: u32) -> Result<(), CommandError> {
        if self.turn.phase != TurnPhase::Place {
            return Err(CommandError::WrongPhase {
                expected: Phase::Place,
            });
        }
        Self::check_troops(troops, self.turn.new_troops)?;
        self.turn.troops_to_place = troops;
        Ok(())
    }

    fn attack_with(&mut self, troops: u32) -> Result<(), CommandError> {
        self.resolve_attack(Some(troops), Advance::Partial)
    }

    fn attack_to_exhaustion(&mut self) -> Result<(), CommandError> {
        self.resolve_attack(None, Advance::Exhaust)
    }

    fn attack_all(&mut self) -> Result<(), CommandError> {
        self.resolve_attack(None, Advance::Partial)
    }

    fn fortify_with(&mut self, troops: u32) -> Result<(), CommandError> {
        self.move_troops(Some(troops))
    }

    fn fortify_all(&mut self) -> Result<(), CommandError> {
        self.move_troops(None)
    }

    fn unselect_all(&mut self) {
        self.map.unselect_all();
        if self.turn.phase == TurnPhase::PostAttackFortify {
            self.turn.phase = TurnPhase::Attack;
        }
    }

    fn end_turn(&mut self) -> Result<(), CommandError> {
        if self.is_game_over() {
            return Err(CommandError::GameOver);
        }
        self.placement_cache.clear();
        self.map.unselect_all();
        let n = self.players.len();
        let next = (1..=n)
            .map(|step| (self.turn.player + step) % n)
            .find(|&p| !self.players[p].is_eliminated())
            .unwrap_or(self.turn.player);
        self.turn = Turn {
            player: next,
            phase: TurnPhase::Place,
            new_troops: self.reinforcements(next),
            troops_to_place: 1,
        };
        info!(player = next, troops = self.turn.new_troops, "turn started");
        Ok(())
    }
}

//! Which controls are visible and enabled, derived from a frame snapshot.
//!
//! The controller holds no state of its own: every render pass calls
//! [`PhaseController::project`] and the shell applies the result wholesale.

use serde::Serialize;
use wars_core::Phase;

use crate::snapshot::FrameSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ControllerState {
    /// No actions are possible (the game is over).
    Idle,
    Placing,
    Attacking,
    Fortifying,
}

/// Options of a troop-count `<select>` and the index to show selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectorModel {
    pub options: Vec<u32>,
    pub selected: usize,
}

impl SelectorModel {
    /// `1..=available`, restoring `staged` when it is one of the options.
    pub fn placement(available: u32, staged: u32) -> Self {
        let options: Vec<u32> = (1..=available).collect();
        let selected = if (1..=available).contains(&staged) {
            (staged - 1) as usize
        } else {
            0
        };
        SelectorModel { options, selected }
    }

    /// Troops that may leave a source holding `movable`; one always stays.
    pub fn movement(movable: u32) -> Self {
        SelectorModel {
            options: (1..movable).collect(),
            selected: 0,
        }
    }

    pub fn selected_value(&self) -> Option<u32> {
        self.options.get(self.selected).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlacementControls {
    /// Apply/clear buttons, selector and counter share visibility.
    pub visible: bool,
    pub selector: SelectorModel,
    /// `"staged/available"`.
    pub counter: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub state: ControllerState,
    pub placement: PlacementControls,
    pub place_enabled: bool,
    pub attack_enabled: bool,
    pub fortify_enabled: bool,
    pub end_turn_enabled: bool,
    pub attack_modal: Option<SelectorModel>,
    pub fortify_modal: Option<SelectorModel>,
    pub winner: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseController;

impl PhaseController {
    pub fn project(&self, snap: &FrameSnapshot) -> ControlsView {
        let state = if snap.game_over {
            ControllerState::Idle
        } else {
            match snap.phase {
                Phase::Place => ControllerState::Placing,
                Phase::Attack => ControllerState::Attacking,
                Phase::Fortify => ControllerState::Fortifying,
            }
        };
        let live = !snap.game_over;

        let placement = if state == ControllerState::Placing {
            PlacementControls {
                visible: true,
                selector: SelectorModel::placement(
                    snap.troops_available_for_placement,
                    snap.troops_to_place,
                ),
                counter: format!(
                    "{}/{}",
                    snap.troops_staged_for_placement, snap.troops_available_for_placement
                ),
            }
        } else {
            PlacementControls::default()
        };

        let modal = |wanted: ControllerState| {
            (state == wanted && snap.target_selected)
                .then(|| SelectorModel::movement(snap.troops_available_for_movement))
        };

        ControlsView {
            state,
            placement,
            place_enabled: live && snap.troops_available_for_placement > 0,
            attack_enabled: live,
            fortify_enabled: live,
            end_turn_enabled: live,
            attack_modal: modal(ControllerState::Attacking),
            fortify_modal: modal(ControllerState::Fortifying),
            winner: snap.winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(phase: Phase) -> FrameSnapshot {
        FrameSnapshot {
            canvas_width: 100,
            canvas_height: 100,
            territories: Vec::new(),
            pending_arrow: None,
            phase,
            game_over: false,
            winner: None,
            current_player: 0,
            target_selected: false,
            troops_available_for_placement: 5,
            troops_staged_for_placement: 3,
            troops_to_place: 3,
            troops_available_for_movement: 0,
        }
    }

    #[test]
    fn placing_shows_counter_and_restores_staged_value() {
        let view = PhaseController.project(&snap(Phase::Place));
        assert_eq!(view.state, ControllerState::Placing);
        assert!(view.placement.visible);
        assert_eq!(view.placement.counter, "3/5");
        assert_eq!(view.placement.selector.options, [1, 2, 3, 4, 5]);
        assert_eq!(view.placement.selector.selected_value(), Some(3));
        assert!(view.attack_modal.is_none() && view.fortify_modal.is_none());
    }

    #[test]
    fn placement_selector_defaults_to_first_option() {
        let s = SelectorModel::placement(4, 9);
        assert_eq!(s.selected, 0);
        assert_eq!(SelectorModel::placement(4, 9), s);
        assert!(SelectorModel::placement(0, 1).is_empty());
    }

    #[test]
    fn modal_needs_both_phase_and_target() {
        let mut s = snap(Phase::Attack);
        s.troops_available_for_movement = 4;
        assert!(PhaseController.project(&s).attack_modal.is_none());

        s.target_selected = true;
        let view = PhaseController.project(&s);
        assert!(!view.placement.visible);
        assert_eq!(view.attack_modal.map(|m| m.options), Some(vec![1, 2, 3]));
        assert!(view.fortify_modal.is_none());

        s.phase = Phase::Fortify;
        let view = PhaseController.project(&s);
        assert!(view.attack_modal.is_none());
        assert!(view.fortify_modal.is_some());
    }

    #[test]
    fn game_over_goes_idle() {
        let mut s = snap(Phase::Attack);
        s.game_over = true;
        s.winner = Some(1);
        s.target_selected = true;
        let view = PhaseController.project(&s);
        assert_eq!(view.state, ControllerState::Idle);
        assert!(!view.attack_enabled && !view.end_turn_enabled && !view.place_enabled);
        assert!(view.attack_modal.is_none());
        assert_eq!(view.winner, Some(1));
    }

    #[test]
    fn place_button_disabled_once_reinforcements_are_spent() {
        let mut s = snap(Phase::Attack);
        s.troops_available_for_placement = 0;
        assert!(!PhaseController.project(&s).place_enabled);
    }
}

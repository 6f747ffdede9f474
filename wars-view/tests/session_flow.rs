mod common;

use wars_core::{Engine, Phase};
use wars_view::{ControlEvent, ControllerState, DrawCommand, Redraw, SelectorModel};

use common::{center_px, classic_session, six_territory_session};

#[test]
fn staging_then_committing_part_of_the_reinforcements_stays_in_placement() {
    let mut session = six_territory_session(4);
    let before = session.render_pass().controls;
    assert_eq!(before.state, ControllerState::Placing);
    assert_eq!(before.placement.counter, "0/5");

    assert_eq!(session.dispatch(ControlEvent::SetTroopsToPlace(3)), Redraw::Yes);
    let (x, y) = center_px(&session, 0);
    assert_eq!(session.click(x, y), Redraw::Yes);

    let staged = session.render_pass();
    assert_eq!(staged.controls.placement.counter, "3/5");
    assert_eq!(staged.controls.placement.selector.selected_value(), Some(3));
    assert_eq!(staged.frame.labels()[0], "7");

    assert_eq!(session.dispatch(ControlEvent::CommitPlacement), Redraw::Yes);
    let after = session.render_pass().controls;
    assert_eq!(after.state, ControllerState::Placing);
    assert!(after.placement.visible);
    assert_eq!(after.placement.counter, "0/2");
    assert_eq!(after.placement.selector.options, [1, 2]);
    assert_eq!(session.engine().troops_for(0), 7);
}

#[test]
fn spending_every_reinforcement_moves_on_to_attack() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::SetTroopsToPlace(5));
    let (x, y) = center_px(&session, 2);
    let _ = session.click(x, y);
    assert_eq!(session.dispatch(ControlEvent::CommitPlacement), Redraw::Yes);

    let controls = session.render_pass().controls;
    assert_eq!(session.engine().phase(), Phase::Attack);
    assert_eq!(controls.state, ControllerState::Attacking);
    assert!(!controls.placement.visible);
    assert!(!controls.place_enabled);

    // Placement cannot be reopened this turn.
    assert_eq!(session.dispatch(ControlEvent::EnterPlace), Redraw::No);
    assert_eq!(session.render_pass().controls.state, ControllerState::Attacking);
}

#[test]
fn attack_modal_appears_only_once_a_target_is_chosen() {
    let mut session = six_territory_session(4);
    assert_eq!(session.dispatch(ControlEvent::EnterAttack), Redraw::Yes);

    let (x, y) = center_px(&session, 0);
    assert_eq!(session.click(x, y), Redraw::Yes);
    let pass = session.render_pass();
    assert_eq!(pass.controls.state, ControllerState::Attacking);
    assert!(pass.controls.attack_modal.is_none());
    assert_eq!(pass.frame.arrows().count(), 0);
    // Source plus the two enemy neighbors 1 and 3.
    assert_eq!(pass.frame.halo_count(), 3);

    // Territory 4 is friendly and not a candidate.
    let (x, y) = center_px(&session, 4);
    assert_eq!(session.click(x, y), Redraw::No);

    let (x, y) = center_px(&session, 1);
    assert_eq!(session.click(x, y), Redraw::Yes);
    let pass = session.render_pass();
    assert_eq!(
        pass.controls.attack_modal,
        Some(SelectorModel {
            options: vec![1, 2, 3],
            selected: 0
        })
    );
    assert!(pass.controls.fortify_modal.is_none());
    assert_eq!(pass.frame.arrows().count(), 1);
}

#[test]
fn rejected_commands_do_not_redraw() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::EnterAttack);
    let before = session.render_pass();

    assert_eq!(session.dispatch(ControlEvent::AttackWith(2)), Redraw::No);
    assert_eq!(session.dispatch(ControlEvent::CommitPlacement), Redraw::No);
    assert_eq!(session.dispatch(ControlEvent::FortifyAll), Redraw::No);
    assert_eq!(session.click(130.0, 40.0), Redraw::No);
    assert_eq!(session.render_pass(), before);
}

#[test]
fn cancel_clears_selection_modal_and_arrow() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::EnterAttack);
    for t in [0, 1] {
        let (x, y) = center_px(&session, t);
        let _ = session.click(x, y);
    }
    assert!(session.render_pass().controls.attack_modal.is_some());

    assert_eq!(session.dispatch(ControlEvent::Cancel), Redraw::Yes);
    let pass = session.render_pass();
    assert!(pass.controls.attack_modal.is_none());
    assert_eq!(pass.frame.arrows().count(), 0);
    assert_eq!(pass.frame.halo_count(), 0);
}

#[test]
fn attacking_conserves_or_removes_troops_and_never_adds() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::EnterAttack);
    for t in [0, 1] {
        let (x, y) = center_px(&session, t);
        let _ = session.click(x, y);
    }
    let before: u32 = (0..6).map(|t| session.engine().troops_for(t)).sum();
    assert_eq!(session.dispatch(ControlEvent::AttackToExhaustion), Redraw::Yes);
    let after: u32 = (0..6).map(|t| session.engine().troops_for(t)).sum();
    assert!(after < before);
    assert!(session.render_pass().controls.attack_modal.is_none());
}

#[test]
fn fortify_modal_and_end_turn() {
    let mut session = six_territory_session(4);
    assert_eq!(session.dispatch(ControlEvent::EnterFortify), Redraw::Yes);
    for t in [4, 2] {
        // Every neighbor of 4 is hostile, so 2 never becomes a target.
        let (x, y) = center_px(&session, t);
        let _ = session.click(x, y);
    }
    assert!(session.render_pass().controls.fortify_modal.is_none());

    let _ = session.dispatch(ControlEvent::Cancel);
    assert_eq!(session.dispatch(ControlEvent::EndTurn), Redraw::Yes);
    let pass = session.render_pass();
    assert_eq!(session.engine().current_player(), 1);
    assert_eq!(pass.controls.state, ControllerState::Placing);
    assert_eq!(pass.controls.placement.counter, "0/5");
}

#[test]
fn fortifying_between_friendly_neighbors_moves_troops() {
    let mut session = classic_session();
    assert_eq!(session.dispatch(ControlEvent::EnterFortify), Redraw::Yes);

    let (x, y) = center_px(&session, 2);
    assert_eq!(session.picker().pick(x, y), Some(2));
    assert_eq!(session.click(x, y), Redraw::Yes);
    let pass = session.render_pass();
    assert!(pass.controls.fortify_modal.is_none());
    // Source plus its friendly neighbors 0 and 4.
    assert_eq!(pass.frame.halo_count(), 3);

    let (x, y) = center_px(&session, 4);
    assert_eq!(session.click(x, y), Redraw::Yes);
    let pass = session.render_pass();
    assert_eq!(pass.controls.state, ControllerState::Fortifying);
    assert_eq!(
        pass.controls.fortify_modal,
        Some(SelectorModel {
            options: vec![1, 2],
            selected: 0
        })
    );
    assert!(pass.controls.attack_modal.is_none());
    assert_eq!(pass.frame.arrows().count(), 1);

    assert_eq!(session.dispatch(ControlEvent::FortifyWith(2)), Redraw::Yes);
    assert_eq!(session.engine().troops_for(2), 1);
    assert_eq!(session.engine().troops_for(4), 7);
    let pass = session.render_pass();
    assert!(pass.controls.fortify_modal.is_none());
    assert_eq!(pass.frame.arrows().count(), 0);
    assert_eq!(session.engine().phase(), Phase::Fortify);

    // Move everything back but the one troop that must stay.
    for t in [4, 2] {
        let (x, y) = center_px(&session, t);
        assert_eq!(session.click(x, y), Redraw::Yes);
    }
    assert_eq!(
        session.render_pass().controls.fortify_modal.map(|m| m.options.len()),
        Some(6)
    );
    assert_eq!(session.dispatch(ControlEvent::FortifyAll), Redraw::Yes);
    assert_eq!(session.engine().troops_for(4), 1);
    assert_eq!(session.engine().troops_for(2), 7);
}

#[test]
fn attacking_with_a_chosen_count_keeps_the_reserve_home() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::EnterAttack);
    for t in [0, 1] {
        let (x, y) = center_px(&session, t);
        let _ = session.click(x, y);
    }
    let before = session.engine().troops_for(0) + session.engine().troops_for(1);
    assert_eq!(session.dispatch(ControlEvent::AttackWith(1)), Redraw::Yes);
    // Win or lose, the three uncommitted troops stay behind.
    assert_eq!(session.engine().troops_for(0), 3);
    let after = session.engine().troops_for(0) + session.engine().troops_for(1);
    assert!(after < before);
}

#[test]
fn render_pass_is_repeatable() {
    let mut session = six_territory_session(4);
    let _ = session.dispatch(ControlEvent::EnterAttack);
    let (x, y) = center_px(&session, 0);
    let _ = session.click(x, y);
    let first = session.render_pass();
    assert_eq!(session.render_pass(), first);
    assert!(matches!(first.frame.commands[0], DrawCommand::Clear { .. }));
}

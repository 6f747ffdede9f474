use tracing::{debug, info};
use wars_core::{CommandError, Engine};

use crate::picking::ColorPicker;

/// A button press or selector change, one per engine command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    ClearPlacement,
    CommitPlacement,
    EnterPlace,
    EnterAttack,
    EnterFortify,
    SetTroopsToPlace(u32),
    AttackWith(u32),
    AttackToExhaustion,
    AttackAll,
    FortifyWith(u32),
    FortifyAll,
    Cancel,
    EndTurn,
}

/// Whether the handled event requires a render pass.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Yes,
    No,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        self == Redraw::Yes
    }
}

impl From<bool> for Redraw {
    fn from(changed: bool) -> Self {
        if changed { Redraw::Yes } else { Redraw::No }
    }
}

/// Forwards pointer and control input to the engine.
///
/// The router never decides game legality itself; the engine either applies
/// a command or rejects it, and a rejection is a silent no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter;

impl InputRouter {
    pub fn on_map_click<E: Engine + ?Sized>(
        &self,
        engine: &mut E,
        picker: &ColorPicker,
        x: f64,
        y: f64,
    ) -> Redraw {
        let Some(t) = picker.pick(x, y) else {
            debug!(x, y, "click missed every territory");
            return Redraw::No;
        };
        let changed = engine.click_action(t);
        debug!(territory = t, changed, "map click");
        changed.into()
    }

    pub fn on_control<E: Engine + ?Sized>(&self, engine: &mut E, event: ControlEvent) -> Redraw {
        match self.apply(engine, event) {
            Ok(()) => Redraw::Yes,
            Err(err) => {
                debug!(?event, %err, "command rejected");
                Redraw::No
            }
        }
    }

    fn apply<E: Engine + ?Sized>(&self, engine: &mut E, event: ControlEvent) -> Result<(), CommandError> {
        match event {
            ControlEvent::ClearPlacement => engine.clear_placement(),
            ControlEvent::CommitPlacement => {
                engine.commit_placement()?;
                if engine.is_place_phase() && engine.troops_available_for_placement() == 0 {
                    info!("reinforcements spent, moving on to attack");
                    // The commit itself landed, so a failed hand-off still redraws.
                    if let Err(err) = engine.enter_attack_phase() {
                        debug!(%err, "attack phase refused after placement");
                    }
                }
            }
            ControlEvent::EnterPlace => engine.enter_place_phase()?,
            ControlEvent::EnterAttack => engine.enter_attack_phase()?,
            ControlEvent::EnterFortify => engine.enter_fortify_phase()?,
            ControlEvent::SetTroopsToPlace(n) => engine.set_troops_to_place(n)?,
            ControlEvent::AttackWith(n) => engine.attack_with(n)?,
            ControlEvent::AttackToExhaustion => engine.attack_to_exhaustion()?,
            ControlEvent::AttackAll => engine.attack_all()?,
            ControlEvent::FortifyWith(n) => engine.fortify_with(n)?,
            ControlEvent::FortifyAll => engine.fortify_all()?,
            ControlEvent::Cancel => engine.unselect_all(),
            ControlEvent::EndTurn => engine.end_turn()?,
        }
        Ok(())
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlSelectElement, MouseEvent};

use wars_view::{ControlEvent, Redraw};

use crate::canvas::event_canvas_coords;
use crate::dom::selected_troops;
use crate::render_loop::RenderScheduler;
use crate::state::State;

fn after(redraw: Redraw, scheduler: &RenderScheduler) {
    if redraw.is_needed() {
        scheduler.request();
    }
}

fn bind_button(
    el: &Option<HtmlElement>,
    event: ControlEvent,
    state: &Rc<RefCell<State>>,
    scheduler: &RenderScheduler,
) {
    let Some(el) = el else { return };
    let st = state.clone();
    let sched = scheduler.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let redraw = st.borrow_mut().session.dispatch(event);
        after(redraw, &sched);
    }));
    el.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
}

/// Selector changes carry the chosen troop count into `make`.
fn bind_selector(
    sel: &Option<HtmlSelectElement>,
    make: fn(u32) -> ControlEvent,
    state: &Rc<RefCell<State>>,
    scheduler: &RenderScheduler,
) {
    let Some(sel) = sel else { return };
    let st = state.clone();
    let sched = scheduler.clone();
    let target = sel.clone();
    let onchange = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let Some(n) = selected_troops(&target) else {
            return;
        };
        let redraw = st.borrow_mut().session.dispatch(make(n));
        after(redraw, &sched);
    }));
    sel.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();
}

pub fn attach_ui(state: &Rc<RefCell<State>>, scheduler: &RenderScheduler) -> Result<(), JsValue> {
    let controls = state.borrow().controls.clone();

    let buttons = [
        (&controls.clear_placement, ControlEvent::ClearPlacement),
        (&controls.apply_placement, ControlEvent::CommitPlacement),
        (&controls.placement_button, ControlEvent::EnterPlace),
        (&controls.attack_button, ControlEvent::EnterAttack),
        (&controls.fortify_button, ControlEvent::EnterFortify),
        (&controls.end_turn_button, ControlEvent::EndTurn),
        (&controls.attack_tail, ControlEvent::AttackToExhaustion),
        (&controls.attack_all, ControlEvent::AttackAll),
        (&controls.attack_cancel, ControlEvent::Cancel),
        (&controls.fortify_all, ControlEvent::FortifyAll),
        (&controls.fortify_cancel, ControlEvent::Cancel),
    ];
    for (el, event) in buttons {
        bind_button(el, event, state, scheduler);
    }

    bind_selector(
        &controls.troops_to_place,
        ControlEvent::SetTroopsToPlace,
        state,
        scheduler,
    );
    bind_selector(&controls.attack_selector, ControlEvent::AttackWith, state, scheduler);
    bind_selector(&controls.fortify_selector, ControlEvent::FortifyWith, state, scheduler);

    // Map clicks
    {
        let st = state.clone();
        let sched = scheduler.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            let redraw = s.session.click(x, y);
            drop(s);
            after(redraw, &sched);
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    Ok(())
}

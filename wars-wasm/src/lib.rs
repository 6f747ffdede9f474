//! Browser front end: paints the map, routes DOM events into the session
//! and keeps the page controls in step with the game.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::prelude::*;

use wars_core::MapData;

mod canvas;
mod config;
mod dom;
mod events;
mod loader;
mod logging;
mod render_loop;
mod state;
mod utils;

use canvas::{init_canvas, paint_frame};
use config::AppConfig;
use dom::{Controls, DomError};
use render_loop::RenderScheduler;
use state::{STATE, State};
use utils::get_query_param;

/// One render pass: paint the frame, then bring the controls in line.
fn render(state: &mut State) {
    let pass = state.session.render_pass();
    paint_frame(&state.ctx, &pass.frame);
    state.controls.apply(&pass.controls);

    if let Some(winner) = pass.controls.winner
        && state.announced_winner != Some(winner)
    {
        state.announced_winner = Some(winner);
        info!(winner, "game over");
        let _ = state
            .window
            .alert_with_message(&format!("Player {} wins!", winner + 1));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or(DomError::NoWindow)?;

    let config = AppConfig::from_window(&window);
    logging::init(config.as_ref().map_or(LevelFilter::INFO, AppConfig::level));
    let config = config.unwrap_or_else(|err| {
        warn!(%err, "ignoring page config");
        AppConfig::default()
    });

    let document = window.document().ok_or(DomError::NoDocument)?;
    let (canvas, ctx) = init_canvas(&document)?;
    let classic = MapData::classic().map_err(loader::LoadError::from)?;
    let session = loader::build_session(&classic, &config)?;
    let controls = Controls::find(&document);

    let state = Rc::new(RefCell::new(State {
        window: window.clone(),
        canvas,
        ctx,
        config,
        session,
        controls,
        announced_winner: None,
    }));
    state.borrow().fit_canvas();
    STATE.with(|st| st.replace(Some(state.clone())));

    let scheduler = {
        let st = state.clone();
        RenderScheduler::new(window.clone(), move || render(&mut st.borrow_mut()))
    };
    events::attach_ui(&state, &scheduler)?;

    // `?map=<name>` swaps the bundled map once the fetch lands.
    if let Ok(search) = window.location().search()
        && let Some(name) = get_query_param(&search, "map")
    {
        let sched = scheduler.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = match loader::fetch_map(&window, &name).await {
                Ok(data) => STATE.with(|st| -> Result<(), loader::LoadError> {
                    let st = st.borrow();
                    let Some(state) = st.as_ref() else {
                        return Ok(());
                    };
                    let session = loader::build_session(&data, &state.borrow().config)?;
                    state.borrow_mut().replace_session(session);
                    Ok(())
                }),
                Err(err) => Err(err),
            };
            match loaded {
                Ok(()) => {
                    info!(map = %name, "map loaded");
                    sched.request();
                }
                Err(err) => warn!(map = %name, %err, "keeping the bundled map"),
            }
        });
    }

    info!("wars front end ready");
    scheduler.request();
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use wars_core::Game;
use wars_view::Session;

use crate::config::AppConfig;
use crate::dom::Controls;

/// Everything the event handlers and the frame callback share.
pub struct State {
    pub window: Window,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub config: AppConfig,
    pub session: Session<Game>,
    pub controls: Controls,
    /// Winner already announced, so the alert fires once.
    pub announced_winner: Option<usize>,
}

impl State {
    pub fn fit_canvas(&self) {
        let (w, h) = self.session.canvas_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    pub fn replace_session(&mut self, session: Session<Game>) {
        self.session = session;
        self.announced_winner = None;
        self.fit_canvas();
    }
}

thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

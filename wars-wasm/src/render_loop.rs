use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Coalesces render requests into at most one pending animation frame.
///
/// Nothing repaints on a timer: callers request a frame after each action
/// that changed engine state.
#[derive(Clone)]
pub struct RenderScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    window: Window,
    pending: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl RenderScheduler {
    pub fn new(window: Window, render: impl Fn() + 'static) -> Self {
        let inner = Rc::new(Inner {
            window,
            pending: Cell::new(false),
            callback: RefCell::new(None),
        });
        let inner_cb = Rc::downgrade(&inner);
        let cb = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(inner) = inner_cb.upgrade() {
                inner.pending.set(false);
            }
            render();
        }));
        *inner.callback.borrow_mut() = Some(cb);
        RenderScheduler { inner }
    }

    pub fn request(&self) {
        if self.inner.pending.replace(true) {
            return;
        }
        let cb = self.inner.callback.borrow();
        let Some(cb) = cb.as_ref() else {
            self.inner.pending.set(false);
            return;
        };
        if self
            .inner
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("requestAnimationFrame refused");
            self.inner.pending.set(false);
        }
    }
}

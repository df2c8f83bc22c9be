use crate::constants::MIN_WAKE_DELAY_MS;
use show_core::Millis;
use std::cell::{Cell, RefCell};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The single `setTimeout` standing in for all pending core timers.
///
/// The session reports its earliest deadline; the timer is re-armed only when
/// that deadline moves, and the previous timeout is always cleared first.
#[derive(Default)]
pub struct WakeTimer {
    handle: Cell<Option<i32>>,
    armed_for: Cell<Option<Millis>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WakeTimer {
    pub fn set_callback(&self, callback: impl FnMut() + 'static) {
        self.clear();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(callback) as Box<dyn FnMut()>));
    }

    pub fn sync(&self, deadline: Option<Millis>, now: Millis) {
        if deadline == self.armed_for.get() && self.handle.get().is_some() {
            return;
        }
        self.clear();
        let Some(at) = deadline else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        let delay = (at - now).max(MIN_WAKE_DELAY_MS).ceil() as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(h) => {
                self.handle.set(Some(h));
                self.armed_for.set(Some(at));
            }
            Err(e) => log::warn!("[web] setTimeout failed: {:?}", e),
        }
    }

    /// Forget the handle of a timeout that just fired.
    pub fn fired(&self) {
        self.handle.set(None);
        self.armed_for.set(None);
    }

    pub fn clear(&self) {
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(h);
            }
        }
        self.armed_for.set(None);
    }
}

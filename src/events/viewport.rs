use crate::constants::{TEARDOWN_EVENT, VIEWPORT_EVENTS};
use crate::dom;
use crate::shell::Shell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_viewport_handlers(shell: &Rc<Shell>) {
    let Some(window) = web::window() else {
        return;
    };
    for event in VIEWPORT_EVENTS {
        let s = shell.clone();
        let w = window.clone();
        dom::add_listener(&window, event, move |_ev: web::Event| {
            let signal = dom::read_viewport(&w);
            s.update(|session, now| session.on_viewport(signal, now));
        });
    }
}

/// Cancel every timer when the page is discarded. A page entering the
/// back/forward cache keeps its session; the browser freezes timers and rAF
/// until it is shown again.
pub fn wire_teardown(shell: &Rc<Shell>) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shell.clone();
    dom::add_listener(&window, TEARDOWN_EVENT, move |ev: web::Event| {
        let cached = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if cached {
            log::info!("[web] {} into back/forward cache, keeping session", TEARDOWN_EVENT);
            return;
        }
        log::info!("[web] {}, tearing down", TEARDOWN_EVENT);
        s.teardown();
    });
}

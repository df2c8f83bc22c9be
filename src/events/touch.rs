use crate::dom;
use crate::shell::Shell;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Position of the touch that changed, in CSS pixels.
fn touch_point(ev: &web::TouchEvent) -> Vec2 {
    ev.changed_touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .unwrap_or(Vec2::ZERO)
}

pub fn wire_touch_handlers(shell: &Rc<Shell>) {
    let Some(window) = web::window() else {
        return;
    };

    // Default actions are left alone so the engine still receives its click.
    let s = shell.clone();
    dom::add_listener(&window, "touchstart", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
            let (ts, at) = (ev.time_stamp(), touch_point(ev));
            s.update(|session, _| session.on_touch_start(ts, at));
        }
    });

    let s = shell.clone();
    dom::add_listener(&window, "touchend", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
            let (ts, at) = (ev.time_stamp(), touch_point(ev));
            s.update(|session, _| session.on_touch_end(ts, at));
        }
    });

    let s = shell.clone();
    dom::add_listener(&window, "touchcancel", move |_ev: web::Event| {
        s.update(|session, _| session.on_touch_cancel());
    });
}

use crate::constants::{LANDSCAPE_CLASS, MOBILE_CLASS, TIER_ATTRIBUTE};
use show_core::{DeviceProfile, PerformanceTier, ViewportSignal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current viewport in CSS pixels; missing values read as zero.
pub fn read_viewport(window: &web::Window) -> ViewportSignal {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    ViewportSignal::new(
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[web] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Mirror the device profile onto <body> classes for styling.
pub fn reflect_profile(document: &web::Document, profile: &DeviceProfile) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = cl.toggle_with_force(MOBILE_CLASS, profile.is_mobile);
        _ = cl.toggle_with_force(LANDSCAPE_CLASS, profile.is_landscape);
    }
}

pub fn reflect_tier(document: &web::Document, tier: PerformanceTier) {
    if let Some(body) = document.body() {
        let value = match tier {
            PerformanceTier::Low => "low",
            PerformanceTier::Normal => "normal",
        };
        _ = body.set_attribute(TIER_ATTRIBUTE, value);
    }
}

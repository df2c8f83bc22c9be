use show_core::HapticPattern;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Play a vibration pattern; a no-op where the Vibration API is missing.
pub fn vibrate(pattern: HapticPattern) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        return;
    }
    let pulses: js_sys::Array = pattern
        .pulses()
        .iter()
        .map(|ms| JsValue::from_f64(*ms as f64))
        .collect();
    if !navigator.vibrate_with_pattern(&pulses) {
        log::debug!("[web] vibrate {} rejected", pattern.name());
    }
}

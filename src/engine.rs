//! Hand-off to the external rendering engine.
//!
//! The engine lives in JS and exposes `window.showEngine` with
//! `applyConfig(config)` and `triggerEffect(kind, x, y)`. A missing bridge is
//! not an error: the show keeps running with whatever the engine defaults to.

use crate::constants::{ENGINE_APPLY_CONFIG, ENGINE_BRIDGE_GLOBAL, ENGINE_TRIGGER_EFFECT};
use glam::Vec2;
use show_core::{EffectKind, RenderConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

static WARNED_MISSING: AtomicBool = AtomicBool::new(false);

fn bridge_method(name: &str) -> Option<(JsValue, js_sys::Function)> {
    let window = web::window()?;
    let bridge = js_sys::Reflect::get(&window, &JsValue::from_str(ENGINE_BRIDGE_GLOBAL)).ok()?;
    let method = (!bridge.is_undefined() && !bridge.is_null())
        .then(|| js_sys::Reflect::get(&bridge, &JsValue::from_str(name)).ok())
        .flatten()
        .and_then(|m| m.dyn_into::<js_sys::Function>().ok());
    match method {
        Some(f) => Some((bridge, f)),
        None => {
            if !WARNED_MISSING.swap(true, Ordering::Relaxed) {
                log::warn!(
                    "[engine] window.{}.{} not available; render updates are dropped",
                    ENGINE_BRIDGE_GLOBAL,
                    name
                );
            }
            None
        }
    }
}

pub fn apply_config(config: &RenderConfig) {
    let json = match serde_json::to_string(config) {
        Ok(j) => j,
        Err(e) => {
            log::error!("[engine] could not serialize config: {}", e);
            return;
        }
    };
    let Ok(value) = js_sys::JSON::parse(&json) else {
        return;
    };
    if let Some((bridge, f)) = bridge_method(ENGINE_APPLY_CONFIG) {
        if let Err(e) = f.call1(&bridge, &value) {
            log::error!("[engine] applyConfig threw: {:?}", e);
        }
    }
}

pub fn trigger_effect(kind: EffectKind, at: Vec2) {
    if let Some((bridge, f)) = bridge_method(ENGINE_TRIGGER_EFFECT) {
        let r = f.call3(
            &bridge,
            &JsValue::from_str(kind.name()),
            &JsValue::from_f64(at.x as f64),
            &JsValue::from_f64(at.y as f64),
        );
        if let Err(e) = r {
            log::error!("[engine] triggerEffect threw: {:?}", e);
        }
    }
}
